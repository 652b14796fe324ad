//! Ordered accumulation of placemark/style pairs into the output document.

use kmz_kml::{Folder, Kml, Placemark, Style};

/// The accumulating output document: (placemark, style) pairs in emission
/// order, nodes first, then edges.
///
/// No deduplication — two placemarks with identical content stay two
/// placemarks.  Consumed exactly once by [`into_kml`](Self::into_kml) when
/// packaging starts.
#[derive(Debug, Default)]
pub struct GeoDocument {
    folder: Folder,
}

impl GeoDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one placemark and its style, placemark first.
    pub fn push(&mut self, placemark: Placemark, style: Style) {
        self.folder.push_placemark(placemark);
        self.folder.push_style(style);
    }

    /// Number of folder entries (2 per placemark/style pair).
    pub fn len(&self) -> usize {
        self.folder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folder.is_empty()
    }

    /// Finalize into the serializable document root.
    pub fn into_kml(self) -> Kml {
        Kml::new(self.folder)
    }
}
