//! The in-memory KML document tree.
//!
//! Features are kept in insertion order and serialized in exactly that
//! order.  There is no deduplication: two placemarks with identical content
//! are two `<Placemark>` elements.

// ── Coordinates ───────────────────────────────────────────────────────────────

/// One KML coordinate tuple.  Serialized `lon,lat` or `lon,lat,alt` —
/// longitude first, per the KML coordinate order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
    pub alt: Option<f64>,
}

impl Coord {
    /// A ground-level coordinate with no altitude component.
    pub fn flat(lon: f64, lat: f64) -> Self {
        Self { lon, lat, alt: None }
    }

    /// A coordinate with an explicit altitude in metres.
    pub fn at_altitude(lon: f64, lat: f64, alt: f64) -> Self {
        Self { lon, lat, alt: Some(alt) }
    }

    pub(crate) fn to_kml(self) -> String {
        match self.alt {
            Some(alt) => format!("{},{},{}", self.lon, self.lat, alt),
            None      => format!("{},{}", self.lon, self.lat),
        }
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Placemark geometry: a point or a line path.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point {
        coord: Coord,
    },
    LineString {
        coords:     Vec<Coord>,
        extrude:    bool,
        tessellate: bool,
    },
}

// ── Placemark ─────────────────────────────────────────────────────────────────

/// A named geographic feature referencing a shared style by url.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Placemark {
    pub name:        Option<String>,
    pub description: Option<String>,
    /// `#`-prefixed style anchor, e.g. `#style_3`.
    pub style_url:   Option<String>,
    pub geometry:    Option<Geometry>,
}

// ── Styles ────────────────────────────────────────────────────────────────────

/// KML `colorMode` values.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Normal,
    Random,
}

impl ColorMode {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ColorMode::Normal => "normal",
            ColorMode::Random => "random",
        }
    }
}

/// Icon appearance for point placemarks.
#[derive(Clone, Debug, PartialEq)]
pub struct IconStyle {
    pub scale: f64,
    /// Archive-relative image filename, e.g. `node_4.png`.
    pub href:  String,
}

/// Line appearance for path placemarks.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    /// 8-hex-digit color code, e.g. `#33ffffff`.
    pub color:      String,
    pub color_mode: ColorMode,
    pub width:      f64,
}

/// A shared style block referenced by id from one or more placemarks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub id:   String,
    pub icon: Option<IconStyle>,
    pub line: Option<LineStyle>,
}

// ── Folder and document root ──────────────────────────────────────────────────

/// One entry of a folder: placemarks and styles interleave freely.
#[derive(Clone, Debug, PartialEq)]
pub enum Feature {
    Placemark(Placemark),
    Style(Style),
}

/// An ordered folder of features.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Folder {
    pub entries: Vec<Feature>,
}

impl Folder {
    pub fn push_placemark(&mut self, placemark: Placemark) {
        self.entries.push(Feature::Placemark(placemark));
    }

    pub fn push_style(&mut self, style: Style) {
        self.entries.push(Feature::Style(style));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The document root: `<kml>` wrapping a single folder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Kml {
    pub folder: Folder,
}

impl Kml {
    pub fn new(folder: Folder) -> Self {
        Self { folder }
    }
}
