//! Latitude/longitude column resolution and the pinned export selection.

use kmz_core::{Column, ColumnId, ColumnRole, GeoPoint, Node};

// Title aliases accepted when no column is role-designated.  Matching is on
// the trimmed, ASCII-lowercased title, whole-title only — a column named
// "dilation" must not match "lat".
const LATITUDE_TITLES: &[&str] = &["latitude", "lat", "y"];
const LONGITUDE_TITLES: &[&str] = &["longitude", "lon", "lng", "long", "x"];

/// Best-guess latitude and longitude columns for a column table.
///
/// A column designated [`ColumnRole::Latitude`]/[`ColumnRole::Longitude`]
/// wins outright; otherwise the first title-alias match is taken.  Either
/// side may come back `None`, meaning the export cannot geolocate anything.
/// Pure function of the column set.
pub fn resolve_geo_columns(columns: &[Column]) -> (Option<&Column>, Option<&Column>) {
    (
        find_column(columns, ColumnRole::Latitude, LATITUDE_TITLES),
        find_column(columns, ColumnRole::Longitude, LONGITUDE_TITLES),
    )
}

fn find_column<'c>(
    columns: &'c [Column],
    role: ColumnRole,
    titles: &[&str],
) -> Option<&'c Column> {
    if let Some(designated) = columns.iter().find(|c| c.role == role) {
        return Some(designated);
    }
    columns
        .iter()
        .find(|c| titles.contains(&c.title.trim().to_ascii_lowercase().as_str()))
}

/// The resolved {latitude, longitude, columns-to-export} triple.
///
/// A value object: cloned once when an export run starts and never touched
/// again, so the coordinate columns are stable for the whole run even if the
/// host mutates its column table concurrently.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportSelection {
    pub latitude:  Column,
    pub longitude: Column,
    /// Columns rendered into node descriptions, in table order.
    pub columns:   Vec<Column>,
}

impl ExportSelection {
    pub fn new(latitude: Column, longitude: Column, columns: Vec<Column>) -> Self {
        Self { latitude, longitude, columns }
    }

    /// Derive a selection from a node column table, exporting every column.
    ///
    /// Returns `None` when either coordinate column cannot be resolved.
    pub fn resolve(columns: &[Column]) -> Option<Self> {
        match resolve_geo_columns(columns) {
            (Some(lat), Some(lon)) => {
                Some(Self::new(lat.clone(), lon.clone(), columns.to_vec()))
            }
            _ => None,
        }
    }

    /// The node's coordinates, if both attribute values are present, numeric,
    /// and finite.
    pub fn coords_of(&self, node: &Node) -> Option<GeoPoint> {
        let lat = node.attribute(self.latitude.id)?.as_f64()?;
        let lon = node.attribute(self.longitude.id)?.as_f64()?;
        let point = GeoPoint::new(lat, lon);
        point.is_finite().then_some(point)
    }

    /// Is `id` one of the two coordinate columns?
    pub fn is_geo_column(&self, id: ColumnId) -> bool {
        id == self.latitude.id || id == self.longitude.id
    }
}
