//! Configuration types for Vellum deck generation.
//!
//! This module provides configuration structures that control document
//! metadata, export and styling. All types implement [`serde::Deserialize`]
//! for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining all sections.
//! - [`DocumentConfig`] - Author and title recorded in the document metadata.
//! - [`ExportConfig`] - Scale and file naming of the SVG writer.
//! - [`StyleConfig`] - Visual overrides such as the slide background.
//!
//! # Example
//!
//! ```
//! # use vellum::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.export().pixels_per_unit(), 96.0);
//! assert!(config.style().background_override().is_none());
//! ```

use serde::Deserialize;

use crate::export::svg::{DEFAULT_FILE_PREFIX, DEFAULT_PIXELS_PER_UNIT};

const DEFAULT_AUTHOR: &str = "GitHub Copilot";
const DEFAULT_TITLE: &str = "Node.js Calculator Application";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Document metadata section.
    #[serde(default)]
    document: DocumentConfig,

    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(document: DocumentConfig, export: ExportConfig, style: StyleConfig) -> Self {
        Self {
            document,
            export,
            style,
        }
    }

    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }

    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Metadata written into the sealed document.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    #[serde(default = "default_author")]
    author: String,

    #[serde(default = "default_title")]
    title: String,
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            title: default_title(),
        }
    }
}

impl DocumentConfig {
    pub fn new(author: &str, title: &str) -> Self {
        Self {
            author: author.to_string(),
            title: title.to_string(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Settings of the SVG writer.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Pixels per canvas unit.
    #[serde(default = "default_pixels_per_unit")]
    pixels_per_unit: f32,

    /// File name prefix; slides are written as `{prefix}-NN.svg`.
    #[serde(default = "default_file_prefix")]
    file_prefix: String,
}

fn default_pixels_per_unit() -> f32 {
    DEFAULT_PIXELS_PER_UNIT
}

fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pixels_per_unit: default_pixels_per_unit(),
            file_prefix: default_file_prefix(),
        }
    }
}

impl ExportConfig {
    pub fn new(pixels_per_unit: f32, file_prefix: &str) -> Self {
        Self {
            pixels_per_unit,
            file_prefix: file_prefix.to_string(),
        }
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    pub fn file_prefix(&self) -> &str {
        &self.file_prefix
    }

    /// Checks the values that the writer cannot recover from.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.pixels_per_unit.is_finite() && self.pixels_per_unit > 0.0) {
            return Err(format!(
                "pixels_per_unit must be a positive number, got {}",
                self.pixels_per_unit
            ));
        }
        if self.file_prefix.is_empty() || self.file_prefix.contains(['/', '\\']) {
            return Err(format!(
                "file_prefix must be a non-empty file name, got `{}`",
                self.file_prefix
            ));
        }
        Ok(())
    }
}

/// Visual overrides.
///
/// Fields that are not set fall back to the deck's own styling.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Theme color name used as background of every content slide.
    #[serde(default)]
    background_override: Option<String>,
}

impl StyleConfig {
    pub fn new(background_override: Option<&str>) -> Self {
        Self {
            background_override: background_override.map(str::to_string),
        }
    }

    /// Returns the configured background color name, if any.
    pub fn background_override(&self) -> Option<&str> {
        self.background_override.as_deref()
    }
}
