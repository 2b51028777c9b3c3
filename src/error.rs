//! Error types for the cvforge library.

use std::io;
use thiserror::Error;

/// Result type alias for cvforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering, persisting, or exporting.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing profile or output files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing or deserializing resume data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error while rendering a template.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Error in the PDF export pipeline.
    #[error("PDF export error: {0}")]
    Export(String),

    /// Error in the persistence layer.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Export(err.to_string()),
        }
    }
}
