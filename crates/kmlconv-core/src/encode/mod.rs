//! Output encoders
//!
//! JSON goes to any writer (stdout in the CLI); CSV goes to a writer or a
//! file path.

pub mod csv;
pub mod json;

pub use self::csv::{write_csv, write_csv_file, CsvOptions, CSV_HEADER};
pub use self::json::{write_json, JsonStyle};
