//! `kmz-core` — foundational types for the kmz export toolkit.
//!
//! This crate is a dependency of every other `kmz-*` crate.  It holds the
//! read-only graph model the exporter consumes and has no knowledge of KML,
//! zip archives, or the host's rendering pipeline.
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `NodeId`, `EdgeId`, `ColumnId`                          |
//! | [`geo`]    | `GeoPoint` (WGS-84 decimal degrees)                     |
//! | [`color`]  | `Rgba`, KML color-code formatting                       |
//! | [`attr`]   | `Column`, `ColumnRole`, `AttributeValue`, attribute maps |
//! | [`graph`]  | `Graph`, `Node`, `Edge`, `GraphBuilder`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod attr;
pub mod color;
pub mod geo;
pub mod graph;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use attr::{AttributeMap, AttributeValue, Column, ColumnRole};
pub use color::Rgba;
pub use geo::GeoPoint;
pub use graph::{Edge, Graph, GraphBuilder, Node};
pub use ids::{ColumnId, EdgeId, NodeId};
