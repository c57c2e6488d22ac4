//! CSV encoder
//!
//! One header row (`Name,Address,Description`) then one row per listing.
//! Quoting is RFC 4180: fields containing the delimiter, a quote or a line
//! break are quoted, and quotes are doubled. Rows end with `\n`.

use crate::error::Result;
use crate::listing::Listing;
use crate::paths::ensure_destination_file;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Fixed leading columns of every CSV file
pub const CSV_HEADER: [&str; 3] = ["Name", "Address", "Description"];

/// CSV layout options
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CsvOptions {
    /// `ExtendedData` names to append as extra columns after `Description`.
    ///
    /// Each cell holds the value of the first `Data` entry with that name,
    /// or is empty. Empty by default: `ExtendedData` is not part of the CSV
    /// output unless asked for.
    pub extra_columns: Vec<String>,
}

/// Write listings as CSV to `writer`
///
/// The header is always written, so zero listings produce a header-only file.
///
/// # Errors
///
/// Returns [`KmlError::Io`](crate::KmlError::Io) if the writer fails.
pub fn write_csv<W: Write>(
    writer: W,
    listings: &[Listing<'_>],
    options: &CsvOptions,
) -> Result<()> {
    let mut csv_writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    let extra = options.extra_columns.iter().map(String::as_str);
    csv_writer.write_record(CSV_HEADER.iter().copied().chain(extra))?;

    for listing in listings {
        let extra = options
            .extra_columns
            .iter()
            .map(|column| listing.data_value(column).unwrap_or_default());
        csv_writer.write_record(
            [listing.name, listing.address, listing.description]
                .into_iter()
                .chain(extra),
        )?;
    }

    csv_writer.flush()?;
    log::debug!("Wrote {} CSV rows", listings.len());
    Ok(())
}

/// Write listings as CSV to a file, creating or truncating it
///
/// Output is buffered and flushed before the file is closed. A failure part
/// way through can leave a truncated file behind.
///
/// # Errors
///
/// Returns [`KmlError::PathIsDirectory`](crate::KmlError::PathIsDirectory) if
/// `path` is a directory, or [`KmlError::Io`](crate::KmlError::Io) if the file
/// cannot be created or written.
pub fn write_csv_file<P: AsRef<Path>>(
    path: P,
    listings: &[Listing<'_>],
    options: &CsvOptions,
) -> Result<()> {
    let path = path.as_ref();
    ensure_destination_file(path)?;

    let file = File::create(path)?;
    write_csv(file, listings, options)
}
