//! Error types for Vellum operations.
//!
//! This module provides the main error type [`VellumError`] which wraps
//! the error conditions of every stage: configuration, composition and
//! export.

use std::io;

use thiserror::Error;

use crate::compose::ComposeError;

/// The main error type for Vellum operations.
#[derive(Debug, Error)]
pub enum VellumError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Composition error: {0}")]
    Compose(#[from] ComposeError),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

impl VellumError {
    /// Returns true if repeating the failed operation may succeed.
    ///
    /// Only writer failures are retryable; every other variant reports a
    /// contract violation that repeats deterministically.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Export(crate::export::Error::Io(_)) | Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_variants() {
        let disk = VellumError::Export(crate::export::Error::Io(io::Error::other("disk full")));
        assert!(disk.is_retryable());

        let render = VellumError::Export(crate::export::Error::Render("NaN".to_string()));
        assert!(!render.is_retryable());

        let sealed = VellumError::from(ComposeError::DocumentSealed);
        assert!(!sealed.is_retryable());
        assert_eq!(sealed.to_string(), "Composition error: document is already sealed");
    }
}
