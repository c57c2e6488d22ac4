//! Path checks shared by the loader and the CSV writer

use crate::error::{KmlError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Require `path` to exist and not be a directory
///
/// # Errors
///
/// Returns [`KmlError::PathNotFound`] or [`KmlError::PathIsDirectory`];
/// other metadata failures (permissions) surface as [`KmlError::Io`].
pub fn ensure_source_file(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Err(KmlError::PathIsDirectory(path.to_path_buf())),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(KmlError::PathNotFound(path.to_path_buf()))
        }
        Err(e) => Err(KmlError::Io(e)),
    }
}

/// Reject a destination that is an existing directory
///
/// A destination that does not exist yet is fine; it is created on write.
///
/// # Errors
///
/// Returns [`KmlError::PathIsDirectory`] if `path` is a directory.
pub fn ensure_destination_file(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(KmlError::PathIsDirectory(path.to_path_buf()));
    }
    Ok(())
}
