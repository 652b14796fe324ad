//! Error types for kmz-kml.

use thiserror::Error;

/// Errors that can occur while serializing a KML document.
#[derive(Debug, Error)]
pub enum KmlError {
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, KmlError>`.
pub type KmlResult<T> = Result<T, KmlError>;
