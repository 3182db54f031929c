//! Vellum CLI library
//!
//! This module contains the core CLI logic for the Vellum deck tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use error_adapter::ErrorAdapter;

use std::path::Path;

use log::{info, warn};

use vellum::{DeckBuilder, VellumError};

/// Run the Vellum CLI application
///
/// Composes the calculator deck, checks it against the canvas and, unless
/// `--validate-only` is given, writes one SVG file per slide into the output
/// directory. Canvas defects are logged, never fatal.
///
/// # Errors
///
/// Returns `VellumError` for:
/// - Configuration loading errors
/// - Composition errors
/// - Rendering and file I/O errors
pub fn run(args: &Args) -> Result<(), VellumError> {
    info!(
        output_path = args.output,
        validate_only = args.validate_only;
        "Building deck"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let builder = DeckBuilder::new(app_config);
    let document = builder.compose()?;

    for (slide, defect) in builder.validate(&document) {
        warn!(slide = slide + 1, defect:%; "Slide leaves the canvas");
    }

    if args.validate_only {
        info!(slide_count = document.len(); "Validation finished, nothing written");
        return Ok(());
    }

    let report = builder.write_svg(&document, Path::new(&args.output))?;

    info!(
        output_path = args.output,
        files = report.files().len(),
        bytes_written = report.bytes_written();
        "SVG slides exported successfully"
    );

    Ok(())
}
