//! kmlconv - KML placemark to JSON/CSV converter

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use kmlconv_cli::{normalize_args, run, usage, Args, ConvertConfig, Verbosity};
use std::env;
use std::process::ExitCode;

fn init_logging(verbosity: Verbosity) {
    // Logs go to stderr; stdout carries the JSON output
    env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}

fn print_usage() {
    eprintln!("{}", usage());
}

fn main() -> ExitCode {
    let raw_args: Vec<_> = env::args_os().collect();
    if raw_args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let args = match Args::try_parse_from(normalize_args(raw_args)) {
        Ok(args) => args,
        // --help and --version print to stdout and exit 0
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Same stream as every other diagnostic, but status 1 rather than clap's 2
            eprint!("{}", e.render());
            return ExitCode::FAILURE;
        }
    };
    let ignored = args.trailing.len();

    if args.usage {
        print_usage();
        return ExitCode::FAILURE;
    }

    let config = match ConvertConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}\n", "Error:".red().bold());
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.verbosity);
    if ignored > 0 {
        log::warn!("Ignoring {ignored} argument(s) after the first non-flag argument");
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Conversion failed: {e:?}");
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
