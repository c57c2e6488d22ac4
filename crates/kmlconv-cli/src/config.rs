//! Run configuration built once from parsed arguments

use crate::args::Args;
use kmlconv_core::{CsvOptions, DecodeOptions, JsonStyle};
use std::path::PathBuf;
use thiserror::Error;

/// Arguments that parse but do not describe a runnable conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("no KML file given (use -kml <path>)")]
    MissingKml,
}

/// Logging level selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors (default)
    #[default]
    Normal,
    /// Everything down to debug
    Verbose,
}

impl Verbosity {
    /// Create from CLI flags
    pub const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    pub const fn level_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Error,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// What the JSON output contains
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum JsonShape {
    /// Array of `{Name, Address, Description, ExtendedData}` listings
    #[default]
    Listings,
    /// The whole decoded document, styles included
    Document,
}

/// Where and how the converted placemarks are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// JSON on stdout
    Stdout { shape: JsonShape, style: JsonStyle },
    /// CSV file at `path`
    Csv { path: PathBuf, options: CsvOptions },
}

/// Validated conversion settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub kml_path: PathBuf,
    pub decode: DecodeOptions,
    pub output: OutputTarget,
    pub verbosity: Verbosity,
}

impl TryFrom<Args> for ConvertConfig {
    type Error = UsageError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let kml_path = args.kml.ok_or(UsageError::MissingKml)?;

        let output = match args.csv {
            Some(path) => OutputTarget::Csv {
                path,
                options: CsvOptions {
                    extra_columns: args.extra_columns,
                },
            },
            None => OutputTarget::Stdout {
                shape: if args.full {
                    JsonShape::Document
                } else {
                    JsonShape::Listings
                },
                style: if args.pretty {
                    JsonStyle::Pretty
                } else {
                    JsonStyle::Compact
                },
            },
        };

        Ok(Self {
            kml_path,
            decode: DecodeOptions {
                strip_newlines: args.strip_newlines,
            },
            output,
            verbosity: Verbosity::from_flags(args.quiet, args.verbose),
        })
    }
}
