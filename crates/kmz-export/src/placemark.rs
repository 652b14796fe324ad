//! Per-node and per-edge placemark + style construction.

use std::fmt::Write as _;

use kmz_core::{Column, Edge, GeoPoint, Node, Rgba};
use kmz_kml::{ColorMode, Coord, Geometry, IconStyle, LineStyle, Placemark, Style};

use crate::columns::ExportSelection;
use crate::normalize::ScaleStats;

/// Icon scale given to the largest node in the graph; everything else
/// scales down proportionally.
pub const MAX_ICON_SCALE: f64 = 2.0;

/// Line color used when an edge carries none: translucent white.
pub const DEFAULT_EDGE_COLOR: &str = "#33ffffff";

// ── Style ids ─────────────────────────────────────────────────────────────────

/// A document-unique style identifier, rendered as `style_<n>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StyleId(pub u32);

impl StyleId {
    /// The style element id, e.g. `style_3`.
    pub fn id_string(self) -> String {
        format!("style_{}", self.0)
    }

    /// The `styleUrl` anchor, e.g. `#style_3`.
    pub fn url(self) -> String {
        format!("#style_{}", self.0)
    }
}

/// Run-scoped id allocator.
///
/// Ids are issued 0, 1, 2, … strictly in emission order (nodes first, then
/// edges) and never reused.  Each export run owns a fresh allocator; there
/// is no process-wide counter.
#[derive(Debug, Default)]
pub(crate) struct StyleIdAllocator {
    next: u32,
}

impl StyleIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> StyleId {
        let id = StyleId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u32 {
        self.next
    }
}

// ── Scaling rules ─────────────────────────────────────────────────────────────

/// `(size / max_size) × 2.0`, or 0 for a graph whose nodes all have size 0.
pub(crate) fn icon_scale(size: f32, max_size: f32) -> f64 {
    if max_size > 0.0 {
        (f64::from(size) / f64::from(max_size)) * MAX_ICON_SCALE
    } else {
        0.0
    }
}

/// Proportional line width; uniform-weight graphs get the full width on
/// every edge.
pub(crate) fn line_width(weight: f64, stats: &ScaleStats, max_edge_width: f64) -> f64 {
    if stats.uniform_weights() {
        max_edge_width
    } else {
        (weight / stats.max_edge_weight) * max_edge_width
    }
}

// ── Node placemarks ───────────────────────────────────────────────────────────

/// Build the placemark + icon style for one valid node.
///
/// The description lists every selected column as a `title: value` line in
/// column order; a missing value renders as an empty string.  The point sits
/// at ground level — no altitude component.
pub(crate) fn node_placemark(
    node: &Node,
    coords: GeoPoint,
    icon_href: &str,
    style_id: StyleId,
    stats: &ScaleStats,
    selection: &ExportSelection,
) -> (Placemark, Style) {
    let mut description = String::new();
    for column in &selection.columns {
        let value = node.attribute(column.id).map(ToString::to_string).unwrap_or_default();
        let _ = writeln!(description, "{}: {}", column.title, value);
    }

    let placemark = Placemark {
        name:        node.label.clone(),
        description: (!description.is_empty()).then_some(description),
        style_url:   Some(style_id.url()),
        geometry:    Some(Geometry::Point { coord: Coord::flat(coords.lon, coords.lat) }),
    };

    let style = Style {
        id:   style_id.id_string(),
        icon: Some(IconStyle {
            scale: icon_scale(node.size, stats.max_node_size),
            href:  icon_href.to_owned(),
        }),
        line: None,
    };

    (placemark, style)
}

// ── Edge placemarks ───────────────────────────────────────────────────────────

/// Build the placemark + line style for one edge between two valid nodes.
///
/// The caller has already verified both endpoints; edges with an unset or
/// coordinate-less endpoint never reach this function.  The description
/// lists edge columns except the two coordinate columns, non-null values
/// only.
pub(crate) fn edge_placemark(
    edge: &Edge,
    source: &Node,
    target: &Node,
    source_coords: GeoPoint,
    target_coords: GeoPoint,
    style_id: StyleId,
    stats: &ScaleStats,
    max_edge_width: f64,
    edge_columns: &[Column],
    selection: &ExportSelection,
) -> (Placemark, Style) {
    let name = edge.label.clone().unwrap_or_else(|| {
        format!("{} and {}", source.label_or_empty(), target.label_or_empty())
    });

    let mut description = String::new();
    for column in edge_columns {
        if selection.is_geo_column(column.id) {
            continue;
        }
        if let Some(value) = edge.attribute(column.id) {
            let _ = writeln!(description, "{}: {}", column.title, value);
        }
    }

    let color = edge
        .color
        .map(Rgba::kml_color_code)
        .unwrap_or_else(|| DEFAULT_EDGE_COLOR.to_owned());

    let placemark = Placemark {
        name:        Some(name),
        description: (!description.is_empty()).then_some(description),
        style_url:   Some(style_id.url()),
        geometry:    Some(Geometry::LineString {
            coords:     vec![
                Coord::at_altitude(source_coords.lon, source_coords.lat, 0.0),
                Coord::at_altitude(target_coords.lon, target_coords.lat, 0.0),
            ],
            extrude:    true,
            tessellate: true,
        }),
    };

    let style = Style {
        id:   style_id.id_string(),
        icon: None,
        line: Some(LineStyle {
            color,
            color_mode: ColorMode::Normal,
            width: line_width(edge.weight, stats, max_edge_width),
        }),
    };

    (placemark, style)
}
