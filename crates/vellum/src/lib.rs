//! Vellum - A layout and composition engine for fixed-canvas slide decks.
//!
//! Content records are placed by layout calculators, turned into draw
//! primitives by emitters, collected per slide by a composer and sealed into
//! an immutable document, which a [`export::DocumentWriter`] persists. The
//! crate ships one complete deck, a presentation of a small calculator web
//! application, composed entirely from those parts.
//!
//! # Pipeline
//!
//! ```text
//! content records ─▶ layout ─▶ emitters ─▶ SlideComposer ─▶ DocumentAssembler ─▶ writer
//! ```

pub mod compose;
pub mod config;
pub mod content;
pub mod export;
pub mod layout;

mod deck;
mod error;

pub use vellum_core::{color, geometry, primitive, style, theme};

pub use deck::SLIDE_COUNT;
pub use error::VellumError;

use std::path::Path;

use log::{debug, warn};

use vellum_core::theme::Theme;

use compose::{Document, DocumentMetadata};
use config::AppConfig;
use export::{DocumentWriter, WriteReport, svg::SvgWriter};
use layout::LayoutDefect;

/// Builder for composing, validating and writing the calculator deck.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use vellum::{DeckBuilder, config::AppConfig};
///
/// let builder = DeckBuilder::new(AppConfig::default());
/// let document = builder.compose().expect("Failed to compose");
///
/// for (slide, defect) in builder.validate(&document) {
///     eprintln!("slide {}: {defect}", slide + 1);
/// }
///
/// let report = builder
///     .write_svg(&document, Path::new("out"))
///     .expect("Failed to write");
/// println!("{} bytes", report.bytes_written());
/// ```
#[derive(Debug, Default)]
pub struct DeckBuilder {
    config: AppConfig,
}

impl DeckBuilder {
    /// Creates a deck builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Composes every slide of the deck into a sealed document.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::Config`] if the background override names a
    /// color the theme lacks, and [`VellumError::Compose`] if composition
    /// fails.
    pub fn compose(&self) -> Result<Document, VellumError> {
        let theme = Theme::midnight();
        let background = self.config.style().background_override();

        if let Some(name) = background.filter(|name| !theme.contains(name)) {
            return Err(VellumError::Config(format!(
                "background_override `{name}` is not a theme color"
            )));
        }

        let document_config = self.config.document();
        let metadata = DocumentMetadata::new(document_config.author(), document_config.title());
        Ok(deck::compose(theme, metadata, background)?)
    }

    /// Checks every slide against the document canvas.
    ///
    /// Returns the 0-based slide index of each defect. Defects are reported,
    /// never fixed.
    pub fn validate(&self, document: &Document) -> Vec<(usize, LayoutDefect)> {
        let canvas = document.metadata().canvas();
        let defects: Vec<_> = document
            .slides()
            .iter()
            .enumerate()
            .flat_map(|(index, slide)| {
                canvas
                    .validate(slide)
                    .into_iter()
                    .map(move |defect| (index, defect))
            })
            .collect();

        if defects.is_empty() {
            debug!(slide_count = document.len(); "Document fits the canvas");
        } else {
            warn!(defect_count = defects.len(); "Document has layout defects");
        }
        defects
    }

    /// Writes `document` as one SVG file per slide into `destination`.
    ///
    /// The call may be repeated with the same document after a failure.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::Config`] for invalid export settings and
    /// [`VellumError::Export`] if rendering or writing fails.
    pub fn write_svg(
        &self,
        document: &Document,
        destination: &Path,
    ) -> Result<WriteReport, VellumError> {
        let export = self.config.export();
        export.validate().map_err(VellumError::Config)?;

        let mut writer = SvgWriter::new()
            .with_pixels_per_unit(export.pixels_per_unit())
            .with_file_prefix(export.file_prefix());
        Ok(writer.write(document, destination)?)
    }
}
