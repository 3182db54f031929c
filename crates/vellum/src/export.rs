//! Persisting sealed documents.
//!
//! This module provides the [`DocumentWriter`] trait, the hand-off point
//! between composition and any output format. It is the last stage of the
//! Vellum pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Content records
//!     ↓ layout (frames)
//! Draw primitives
//!     ↓ compose (slides)
//! Sealed Document
//!     ↓ export (this module)
//! Output files
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - one SVG file per slide via [`svg::SvgWriter`]
//!
//! # Retrying
//!
//! A write is a single blocking call with no partial-write recovery. Sealed
//! documents are immutable, so a failed write is retried by calling
//! [`DocumentWriter::write`] again with the same document.
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`VellumError::Export`] at the crate
//! boundary.
//!
//! [`VellumError::Export`]: crate::VellumError::Export

/// SVG export backend.
pub mod svg;

use std::path::{Path, PathBuf};

use crate::compose::Document;

/// Abstraction for document output backends.
pub trait DocumentWriter {
    /// Writes every slide of `document` to `destination`.
    ///
    /// # Arguments
    ///
    /// * `document` - The sealed document to persist.
    /// * `destination` - Where the backend places its output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a slide holds geometry the backend cannot
    /// encode, or [`Error::Io`] if writing the output fails.
    fn write(&mut self, document: &Document, destination: &Path) -> Result<WriteReport, Error>;
}

/// Summary of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    location: PathBuf,
    bytes_written: u64,
    files: Vec<PathBuf>,
}

impl WriteReport {
    pub fn new(location: PathBuf, bytes_written: u64, files: Vec<PathBuf>) -> Self {
        Self {
            location,
            bytes_written,
            files,
        }
    }

    /// Returns the destination the document was written to.
    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Returns the files created, in slide order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

/// Errors that can occur while writing a document.
///
/// This type is converted into [`VellumError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`VellumError::Export`]: crate::VellumError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
