//! JSON encoder

use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// JSON layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum JsonStyle {
    /// Single line
    #[default]
    Compact,
    /// Two-space indentation
    Pretty,
}

/// Serialize `value` as one JSON document followed by a newline
///
/// Works for both output shapes: the listing array (`&[Listing]`) and the
/// full [`Document`](crate::Document).
///
/// # Errors
///
/// Returns [`KmlError::Serialization`](crate::KmlError::Serialization) if the
/// value cannot be encoded, or [`KmlError::Io`](crate::KmlError::Io) if the
/// writer fails.
pub fn write_json<W, T>(mut writer: W, value: &T, style: JsonStyle) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    match style {
        JsonStyle::Compact => serde_json::to_writer(&mut writer, value)?,
        JsonStyle::Pretty => serde_json::to_writer_pretty(&mut writer, value)?,
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
