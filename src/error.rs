//! Error types for fontsift library.

use std::io;
use thiserror::Error;

/// Result type alias for fontsift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while fetching or analyzing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding JSON document data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is not a recognized document export.
    #[error("Unknown input format: expected a JSON array, NDJSON, or gzip of either")]
    UnknownFormat,

    /// The run configuration cannot produce a query.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The document source failed to deliver documents.
    #[error("Document source error: {0}")]
    Source(String),

    /// A document has a structure the analyzer cannot walk.
    #[error("Malformed document: {0}")]
    Malformed(String),

    /// A required document field is missing or has the wrong type.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}
