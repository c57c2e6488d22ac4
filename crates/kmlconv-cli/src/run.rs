//! Conversion pipeline: load → project → encode

use crate::config::{ConvertConfig, JsonShape, OutputTarget};
use anyhow::{Context, Result};
use kmlconv_core::paths::ensure_destination_file;
use kmlconv_core::{load_document, project, write_csv_file, write_json};
use std::io::{self, BufWriter, Write};

/// Run one conversion, printing JSON output to stdout
///
/// # Errors
///
/// Returns the first failure (bad path, malformed KML, write error) with
/// the stage and path attached as context.
pub fn run(config: &ConvertConfig) -> Result<()> {
    run_to(config, io::stdout().lock())
}

/// Run one conversion with JSON output going to `stdout`
///
/// # Errors
///
/// See [`run`].
pub fn run_to<W: Write>(config: &ConvertConfig, stdout: W) -> Result<()> {
    // Reject a directory destination before doing any work
    if let OutputTarget::Csv { path, .. } = &config.output {
        ensure_destination_file(path)
            .with_context(|| format!("cannot write CSV to {}", path.display()))?;
    }

    let document = load_document(&config.kml_path, &config.decode)
        .with_context(|| format!("cannot read KML from {}", config.kml_path.display()))?;
    log::info!(
        "Loaded {} placemark(s) from {}",
        document.placemarks.len(),
        config.kml_path.display()
    );

    match &config.output {
        OutputTarget::Stdout { shape, style } => {
            let out = BufWriter::new(stdout);
            let written = match shape {
                JsonShape::Listings => write_json(out, project(&document).as_slice(), *style),
                JsonShape::Document => write_json(out, &document, *style),
            };
            written.context("cannot write JSON to stdout")?;
        }
        OutputTarget::Csv { path, options } => {
            let listings = project(&document);
            write_csv_file(path, &listings, options)
                .with_context(|| format!("cannot write CSV to {}", path.display()))?;
            log::info!("Wrote {} row(s) to {}", listings.len(), path.display());
        }
    }

    Ok(())
}
