//! The export pipeline orchestrator.

use std::io::{Seek, Write};

use tracing::{debug, warn};

use kmz_core::{Edge, GeoPoint, Graph, Node};

use crate::assemble::GeoDocument;
use crate::classify::{Coverage, classify};
use crate::columns::ExportSelection;
use crate::error::{ExportError, ExportResult};
use crate::icon::{IconRegistry, IconRenderer};
use crate::normalize::ScaleStats;
use crate::package::write_kmz;
use crate::placemark::{StyleIdAllocator, edge_placemark, node_placemark};
use crate::progress::ProgressTicket;

/// Default line width, in viewer pixels, given to the heaviest edge.
pub const DEFAULT_MAX_EDGE_WIDTH: f64 = 10.0;

/// Per-exporter settings.  Everything else is run-scoped.
#[derive(Clone, Debug)]
pub struct ExportConfig {
    /// Explicit column selection.  `None` lets the exporter resolve
    /// latitude/longitude from the node table by role and title, exporting
    /// every node column.
    pub selection:      Option<ExportSelection>,
    /// Line width given to the heaviest edge; lighter edges scale down
    /// proportionally.
    pub max_edge_width: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { selection: None, max_edge_width: DEFAULT_MAX_EDGE_WIDTH }
    }
}

/// Counts from a finished run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub node_placemarks: usize,
    pub edge_placemarks: usize,
    /// Edges dropped because an endpoint was unset, unknown, or had no
    /// coordinates.
    pub skipped_edges:   usize,
    /// Nodes without usable coordinates.
    pub invalid_nodes:   usize,
}

/// Distinguishable outcomes of a run that did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Archive written; coordinate coverage was good.
    Completed(ExportSummary),
    /// Archive written, but more nodes lacked coordinates than had them.
    /// `invalid_percent` is the rounded share of coordinate-less nodes.
    CompletedWithWarning { summary: ExportSummary, invalid_percent: u32 },
    /// The host cancelled mid-run; nothing was written.
    Cancelled,
}

/// Exports one graph per call to a KMZ archive.
///
/// All mutable run state — the style-id counter, the icon filename
/// registry, the accumulating document — is scoped to a single
/// [`export`](Self::export) call, so one exporter value can serve many runs
/// and concurrent runs never observe each other.
#[derive(Clone, Debug, Default)]
pub struct KmzExporter {
    config: ExportConfig,
}

impl KmzExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Run the full pipeline: resolve columns → classify → normalize →
    /// emit node placemarks → emit edge placemarks → package.
    ///
    /// The ticket is finished on every path — success, error, and
    /// cancellation alike.
    pub fn export<W, R, P>(
        &self,
        graph: &Graph,
        renderer: &mut R,
        ticket: &mut P,
        out: W,
    ) -> ExportResult<ExportOutcome>
    where
        W: Write + Seek,
        R: IconRenderer,
        P: ProgressTicket,
    {
        let result = self.run(graph, renderer, ticket, out);
        ticket.finish();
        result
    }

    fn run<W, R, P>(
        &self,
        graph: &Graph,
        renderer: &mut R,
        ticket: &mut P,
        out: W,
    ) -> ExportResult<ExportOutcome>
    where
        W: Write + Seek,
        R: IconRenderer,
        P: ProgressTicket,
    {
        // Column resolution happens once; the selection is pinned for the
        // whole run.
        let selection = match &self.config.selection {
            Some(explicit) => explicit.clone(),
            None => ExportSelection::resolve(graph.node_columns())
                .ok_or(ExportError::NoGeocoordinates)?,
        };

        ticket.stage("Finding nodes");
        let classification = classify(graph, &selection);
        let invalid_percent = match classification.coverage() {
            Coverage::Empty => return Err(ExportError::NoGeocoordinates),
            Coverage::Sparse { invalid_percent } => {
                warn!(
                    invalid_percent,
                    "most nodes have no geocoordinates; the archive will be thin"
                );
                Some(invalid_percent)
            }
            Coverage::Full => None,
        };

        let stats = ScaleStats::compute(graph);
        debug!(
            valid = classification.valid.len(),
            invalid = classification.invalid_count,
            max_node_size = f64::from(stats.max_node_size),
            "classified graph"
        );

        ticket.start(classification.valid.len() + graph.edge_count());

        let mut styles = StyleIdAllocator::new();
        let mut icons = IconRegistry::new();
        let mut document = GeoDocument::new();
        let mut summary = ExportSummary {
            invalid_nodes: classification.invalid_count,
            ..ExportSummary::default()
        };

        // ── Node pass ─────────────────────────────────────────────────────
        for &(node, coords) in &classification.valid {
            if ticket.is_cancelled() {
                return Ok(ExportOutcome::Cancelled);
            }

            let Some(filename) = renderer.render(node) else {
                ticket.tick();
                continue;
            };
            icons.register(&filename);

            let (placemark, style) =
                node_placemark(node, coords, &filename, styles.next_id(), &stats, &selection);
            document.push(placemark, style);
            summary.node_placemarks += 1;
            ticket.tick();
        }

        if styles.issued() == 0 {
            return Err(ExportError::PreviewNotRendered);
        }

        // ── Edge pass ─────────────────────────────────────────────────────
        ticket.stage("Exporting edges");
        for edge in graph.edges() {
            if ticket.is_cancelled() {
                return Ok(ExportOutcome::Cancelled);
            }

            let Some((source, source_coords, target, target_coords)) =
                edge_endpoints(graph, &selection, edge)
            else {
                summary.skipped_edges += 1;
                ticket.tick();
                continue;
            };

            let (placemark, style) = edge_placemark(
                edge,
                source,
                target,
                source_coords,
                target_coords,
                styles.next_id(),
                &stats,
                self.config.max_edge_width,
                graph.edge_columns(),
                &selection,
            );
            document.push(placemark, style);
            summary.edge_placemarks += 1;
            ticket.tick();
        }

        // ── Packaging ─────────────────────────────────────────────────────
        ticket.stage("Writing archive");
        write_kmz(document.into_kml(), renderer, &icons, out)?;
        debug!(
            placemarks = summary.node_placemarks + summary.edge_placemarks,
            icons = icons.len(),
            "wrote KMZ archive"
        );

        Ok(match invalid_percent {
            Some(invalid_percent) => {
                ExportOutcome::CompletedWithWarning { summary, invalid_percent }
            }
            None => ExportOutcome::Completed(summary),
        })
    }
}

/// Both endpoints of `edge`, with coordinates, or `None` if either is
/// unset, unknown to the graph, or coordinate-less.
fn edge_endpoints<'g>(
    graph: &'g Graph,
    selection: &ExportSelection,
    edge: &Edge,
) -> Option<(&'g Node, GeoPoint, &'g Node, GeoPoint)> {
    let source = graph.node(edge.source?)?;
    let target = graph.node(edge.target?)?;
    let source_coords = selection.coords_of(source)?;
    let target_coords = selection.coords_of(target)?;
    Some((source, source_coords, target, target_coords))
}
