//! Command-line interface for `kmlconv`
//!
//! This crate provides the `kmlconv` tool, which reads the placemarks of a
//! KML file and writes them as JSON (stdout) or CSV (file).
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/kmlconv-cli
//! ```
//!
//! # Quick Start
//!
//! ```bash
//! # Placemarks as a JSON array on stdout
//! kmlconv -kml landmarks.kml
//!
//! # Placemarks as CSV (Name,Address,Description)
//! kmlconv -kml landmarks.kml -csv landmarks.csv
//!
//! # Whole document (styles, style map, placemarks), indented
//! kmlconv -kml landmarks.kml -full -pretty
//!
//! # Extra CSV column from ExtendedData
//! kmlconv -kml landmarks.kml -csv landmarks.csv -extra-column "Registry Number"
//! ```
//!
//! Flags accept both `-flag` and `--flag`, and `-flag=value`.
//!
//! # Exit Codes
//!
//! - `0` - Success
//! - `1` - Usage error (no arguments, unknown flag, missing `-kml`, `-?`) or
//!   any conversion failure (missing file, directory, malformed KML, I/O)

pub mod args;
pub mod config;
pub mod run;

pub use args::{normalize_args, usage, Args};
pub use config::{ConvertConfig, JsonShape, OutputTarget, UsageError, Verbosity};
pub use run::{run, run_to};
