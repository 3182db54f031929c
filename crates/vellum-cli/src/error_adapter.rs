//! Error adapter for converting VellumError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Every variant maps
//! to a stable diagnostic code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use vellum::VellumError;

/// Adapter rendering a [`VellumError`] through miette.
pub struct ErrorAdapter(pub VellumError);

impl ErrorAdapter {
    /// Returns the stable diagnostic code of the wrapped error.
    pub fn code_str(&self) -> &'static str {
        match &self.0 {
            VellumError::Io(_) => "vellum::io",
            VellumError::Config(_) => "vellum::config",
            VellumError::Compose(_) => "vellum::compose",
            VellumError::Export(_) => "vellum::export",
        }
    }
}

impl fmt::Debug for ErrorAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            VellumError::Config(_) => "check the configuration file passed with --config",
            err if err.is_retryable() => "the write can be retried once the destination is writable",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
