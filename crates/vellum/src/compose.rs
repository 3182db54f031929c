//! Slide composition and document assembly.
//!
//! A slide is built by a [`SlideComposer`], which walks through the states
//! of [`SlideState`] and is finished with [`SlideComposer::finalize`].
//! Finalized slides are collected by a [`DocumentAssembler`], which seals
//! them into an immutable [`Document`].

mod document;
mod slide;

pub use document::{Document, DocumentAssembler, DocumentMetadata};
pub use slide::{Slide, SlideComposer, SlideId, SlideState};

use thiserror::Error;

use vellum_core::theme::ThemeError;

use crate::layout::LayoutError;

/// Errors raised while turning content into slides and documents.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComposeError {
    /// A style or background referenced a color the theme does not define.
    #[error(transparent)]
    UnknownColorName(#[from] ThemeError),

    /// A layout spec was invalid or referenced something it does not know.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// A table's rows, column widths or row heights disagree with its header.
    #[error("malformed table: {0}")]
    MalformedTable(String),

    /// A slide was modified after it was finalized.
    #[error("slide {0} is already finalized")]
    SlideFinalized(SlideId),

    /// A slide was appended to a document before it was finalized.
    #[error("slide {0} has not been finalized")]
    SlideNotFinalized(SlideId),

    /// The same slide was appended to a document twice.
    #[error("slide {0} was already appended to this document")]
    DuplicateAppend(SlideId),

    /// The document was modified or sealed after it was sealed.
    #[error("document is already sealed")]
    DocumentSealed,
}
