//! Error types for KML conversion

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, decoding or encoding KML data
#[derive(Debug, Error)]
pub enum KmlError {
    /// Input path does not exist
    #[error("{} doesn't exist", .0.display())]
    PathNotFound(PathBuf),

    /// Path points at a directory where a file was expected
    #[error("{} is a directory", .0.display())]
    PathIsDirectory(PathBuf),

    /// KML payload is not well-formed XML (or not a `<kml>` document)
    #[error("malformed KML: {0}")]
    MalformedInput(String),

    /// JSON or CSV encoding failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<roxmltree::Error> for KmlError {
    fn from(err: roxmltree::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}

impl From<serde_json::Error> for KmlError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.into())
        } else {
            Self::Serialization(err.to_string())
        }
    }
}

impl From<csv::Error> for KmlError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(e) => Self::Io(e),
                other => Self::Serialization(format!("{other:?}")),
            }
        } else {
            Self::Serialization(err.to_string())
        }
    }
}

/// Result type for KML conversion operations
pub type Result<T> = std::result::Result<T, KmlError>;
