//! Error types for kmz-export.

use thiserror::Error;

/// Errors that abort an export run.
///
/// Cancellation is deliberately not here — it is a normal outcome
/// ([`ExportOutcome::Cancelled`][crate::ExportOutcome]), not a failure.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No latitude/longitude columns could be resolved, or every node was
    /// missing a coordinate value.  Detected before any output is built.
    #[error("no geocoordinates found: nothing in this graph can be placed on a map")]
    NoGeocoordinates,

    /// The icon renderer produced nothing for any valid node, so not a
    /// single placemark was emitted.  Detected before edge processing.
    #[error("the preview has not been rendered; refresh it and export again")]
    PreviewNotRendered,

    /// An icon filename was registered during the node pass but its bytes
    /// were gone at packaging time — a renderer contract violation.
    #[error("icon {filename} has no retrievable bytes")]
    MissingIcon { filename: String },

    #[error("KML serialization error: {0}")]
    Kml(#[from] kmz_kml::KmlError),

    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, ExportError>`.
pub type ExportResult<T> = Result<T, ExportError>;
