//! Command-line arguments
//!
//! Flags are spelled Go-style on the command line (`-kml file.kml`,
//! `-csv=out.csv`, `-?`). [`normalize_args`] rewrites them into the
//! `--long` form clap parses; the double-dash spelling works as well.
//!
//! Parsing follows Go's `flag` conventions: a repeated flag keeps its last
//! value, and everything from the first non-flag argument on is left
//! unparsed (collected in [`Args::trailing`]).

use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "kmlconv",
    about = "Convert KML placemarks to JSON or CSV",
    long_about = "Convert KML placemarks to JSON or CSV.\n\
                  \n\
                  Reads the placemarks of a KML file and prints them as a JSON array on\n\
                  stdout, or writes them to a CSV file with the columns Name, Address\n\
                  and Description.",
    version,
    args_override_self = true
)]
pub struct Args {
    /// Source KML file
    #[arg(long, value_name = "PATH")]
    pub kml: Option<PathBuf>,

    /// Destination CSV file (JSON is printed to stdout when omitted)
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Print the whole decoded document (styles included) instead of the placemark listings
    #[arg(long, conflicts_with = "csv")]
    pub full: bool,

    /// Indent JSON output
    #[arg(long, conflicts_with = "csv")]
    pub pretty: bool,

    /// Remove all newlines from the KML before decoding
    #[arg(long)]
    pub strip_newlines: bool,

    /// Add a CSV column holding the named ExtendedData value (repeatable)
    #[arg(long = "extra-column", value_name = "NAME", requires = "csv")]
    pub extra_columns: Vec<String>,

    /// Print usage and exit with status 1 (spelled `-?`)
    #[arg(long, hide = true)]
    pub usage: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Log decoding details
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Arguments after the first non-flag argument; flag parsing stops there
    #[arg(trailing_var_arg = true, hide = true, value_name = "ARGS")]
    pub trailing: Vec<OsString>,
}

/// Rewrite Go-style single-dash long flags into clap's `--flag` form
///
/// The program name (first element) is left alone. `-?` becomes `--usage`.
/// Only names of known long flags are rewritten, so values that happen to
/// start with a dash pass through unchanged.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let command = Args::command();
    let long_flags: Vec<&str> = command
        .get_arguments()
        .filter_map(clap::Arg::get_long)
        .chain(["help", "version"])
        .collect();

    args.into_iter()
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 {
                arg
            } else {
                normalize_flag(arg, &long_flags)
            }
        })
        .collect()
}

fn normalize_flag(arg: OsString, long_flags: &[&str]) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };
    if text == "-?" {
        return OsString::from("--usage");
    }
    match text.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => {
            let name = rest.split('=').next().unwrap_or(rest);
            if long_flags.contains(&name) {
                OsString::from(format!("--{rest}"))
            } else {
                arg
            }
        }
        _ => arg,
    }
}

/// Full usage text
pub fn usage() -> String {
    Args::command().render_help().to_string()
}
