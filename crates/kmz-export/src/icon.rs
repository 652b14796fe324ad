//! The icon-renderer collaborator boundary and the run-scoped asset registry.
//!
//! How icons are rasterized is the host's business; the pipeline only needs
//! a deterministic filename per node and the bytes back at packaging time.

use kmz_core::Node;
use rustc_hash::FxHashSet;

/// Host collaborator that produces one icon image per exported node.
pub trait IconRenderer {
    /// Render (or look up) the icon for `node` and return its
    /// archive-relative filename.  Filenames must be deterministic and
    /// idempotent per node within one run, and distinct across nodes.
    ///
    /// Returning `None` means the host's preview has nothing for this node;
    /// the exporter then skips the node entirely — no placemark, no style
    /// id, no archive entry.
    fn render(&mut self, node: &Node) -> Option<String>;

    /// Bytes of an icon rendered earlier in this run.
    fn icon_bytes(&self, filename: &str) -> Option<&[u8]>;
}

/// Run-scoped record of produced icon filenames, in production order.
///
/// Filenames are the binding key between a style's `href` and the archive
/// entry, so the packager consumes exactly this list — assets are never
/// regenerated or reordered between production and packaging.
#[derive(Debug, Default)]
pub struct IconRegistry {
    order: Vec<String>,
    seen:  FxHashSet<String>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a produced filename.  A repeated filename is recorded once;
    /// the archive must not contain duplicate entry names.
    pub fn register(&mut self, filename: &str) {
        if self.seen.insert(filename.to_owned()) {
            self.order.push(filename.to_owned());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// An [`IconRenderer`] that serves one marker image for every node, under a
/// per-node filename.
///
/// For hosts (and tests) without a preview pipeline: every node gets the
/// same bytes, but each still gets its own archive entry so the 1:1
/// node-to-icon contract holds.
pub struct SingleIconRenderer {
    bytes:    Vec<u8>,
    rendered: FxHashSet<String>,
}

impl SingleIconRenderer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, rendered: FxHashSet::default() }
    }
}

impl IconRenderer for SingleIconRenderer {
    fn render(&mut self, node: &Node) -> Option<String> {
        let filename = format!("node_{}.png", node.id.0);
        self.rendered.insert(filename.clone());
        Some(filename)
    }

    fn icon_bytes(&self, filename: &str) -> Option<&[u8]> {
        self.rendered.contains(filename).then_some(self.bytes.as_slice())
    }
}
