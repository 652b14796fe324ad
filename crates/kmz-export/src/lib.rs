//! `kmz-export` — the graph → KMZ export pipeline.
//!
//! Takes a read-only [`kmz_core::Graph`], finds (or is told) which attribute
//! columns hold latitude and longitude, and writes a KMZ archive: a zipped
//! KML document plus one icon image per exported node.
//!
//! # Pipeline
//!
//! ```text
//! resolve columns → classify nodes → normalize scales
//!     → emit node placemarks → emit edge placemarks → package zip
//! ```
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`columns`]   | `ExportSelection`, latitude/longitude column resolver  |
//! | [`classify`]  | valid/invalid node partition, coverage thresholds      |
//! | [`normalize`] | `ScaleStats` — graph-wide size/weight extrema          |
//! | [`icon`]      | `IconRenderer` collaborator boundary, icon registry    |
//! | [`placemark`] | per-node / per-edge placemark + style construction     |
//! | [`assemble`]  | `GeoDocument` — ordered placemark/style accumulation   |
//! | [`package`]   | zip packaging (`doc.kml` + icon entries)               |
//! | [`progress`]  | `ProgressTicket` host channel, `CancelToken`           |
//! | [`exporter`]  | `KmzExporter` orchestration, outcomes                  |
//! | [`error`]     | `ExportError`, `ExportResult`                          |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs the normalization passes on Rayon's thread pool.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::fs::File;
//! use kmz_export::{ExportConfig, KmzExporter, NoopTicket, SingleIconRenderer};
//!
//! let exporter = KmzExporter::new(ExportConfig::default());
//! let mut renderer = SingleIconRenderer::new(marker_png_bytes);
//! let out = File::create("graph.kmz")?;
//! let outcome = exporter.export(&graph, &mut renderer, &mut NoopTicket, out)?;
//! ```

pub mod assemble;
pub mod classify;
pub mod columns;
pub mod error;
pub mod exporter;
pub mod icon;
pub mod normalize;
pub mod package;
pub mod placemark;
pub mod progress;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use classify::{Classification, Coverage, classify};
pub use columns::{ExportSelection, resolve_geo_columns};
pub use error::{ExportError, ExportResult};
pub use exporter::{ExportConfig, ExportOutcome, ExportSummary, KmzExporter};
pub use icon::{IconRenderer, SingleIconRenderer};
pub use normalize::ScaleStats;
pub use placemark::StyleId;
pub use progress::{CancelToken, NoopTicket, ProgressTicket};
