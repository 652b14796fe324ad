//! `kmz-kml` — a minimal KML 2.2 document tree and its XML serialization.
//!
//! Only the subset the exporter emits is modeled: one folder of placemarks
//! (points and 2-point lines) and shared styles (icon and line).  The tree
//! is built in memory and serialized once with the `quick-xml` event writer.
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`document`] | `Kml`, `Folder`, `Placemark`, `Geometry`, `Style`    |
//! | [`write`]    | event-writer serialization (`Kml::write_to`)         |
//! | [`error`]    | `KmlError`, `KmlResult`                              |

pub mod document;
pub mod error;
pub mod write;

#[cfg(test)]
mod tests;

pub use document::{
    ColorMode, Coord, Feature, Folder, Geometry, IconStyle, Kml, LineStyle, Placemark, Style,
};
pub use error::{KmlError, KmlResult};
