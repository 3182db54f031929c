//! Document assembly.

use std::collections::HashSet;

use log::{debug, info};

use crate::layout::Canvas;

use super::{ComposeError, Slide, SlideId};

/// Descriptive data carried by a document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMetadata {
    author: String,
    title: String,
    canvas: Canvas,
}

impl DocumentMetadata {
    /// Creates metadata for a document on the standard canvas.
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            canvas: Canvas::STANDARD,
        }
    }

    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }
}

/// A sealed, immutable sequence of slides.
///
/// A document can only be obtained from [`DocumentAssembler::seal`]. It
/// exposes no mutating methods, so it can be handed to a writer any number
/// of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    metadata: DocumentMetadata,
    slides: Vec<Slide>,
}

impl Document {
    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Returns the slides in the order they were appended.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// Collects finalized slides and seals them into a [`Document`].
#[derive(Debug)]
pub struct DocumentAssembler {
    metadata: DocumentMetadata,
    slides: Vec<Slide>,
    seen: HashSet<SlideId>,
    sealed: bool,
}

impl DocumentAssembler {
    pub fn new(metadata: DocumentMetadata) -> Self {
        Self {
            metadata,
            slides: Vec::new(),
            seen: HashSet::new(),
            sealed: false,
        }
    }

    /// Returns the number of slides appended so far.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Appends a finalized slide.
    ///
    /// # Errors
    ///
    /// - [`ComposeError::DocumentSealed`] once the document has been sealed
    /// - [`ComposeError::SlideNotFinalized`] if the slide is still open
    /// - [`ComposeError::DuplicateAppend`] if a slide with the same id (the
    ///   same slide or a clone of it) was already appended
    pub fn append(&mut self, slide: Slide) -> Result<(), ComposeError> {
        if self.sealed {
            return Err(ComposeError::DocumentSealed);
        }
        if !slide.is_finalized() {
            return Err(ComposeError::SlideNotFinalized(slide.id()));
        }
        if !self.seen.insert(slide.id()) {
            return Err(ComposeError::DuplicateAppend(slide.id()));
        }

        debug!(
            slide_id:% = slide.id(),
            position = self.slides.len() + 1;
            "Slide appended"
        );
        self.slides.push(slide);
        Ok(())
    }

    /// Seals the document and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::DocumentSealed`] if the document was already
    /// sealed.
    pub fn seal(&mut self) -> Result<Document, ComposeError> {
        if self.sealed {
            return Err(ComposeError::DocumentSealed);
        }
        self.sealed = true;

        let slides = std::mem::take(&mut self.slides);
        info!(
            title = self.metadata.title(),
            slide_count = slides.len();
            "Document sealed"
        );

        Ok(Document {
            metadata: self.metadata.clone(),
            slides,
        })
    }
}

#[cfg(test)]
mod tests {
    use vellum_core::theme::Theme;

    use super::*;
    use crate::compose::SlideComposer;

    fn metadata() -> DocumentMetadata {
        DocumentMetadata::new("Vellum", "Assembly test")
    }

    fn finalized_slide() -> Slide {
        let mut composer = SlideComposer::new(Theme::midnight());
        composer.finalize().unwrap();
        composer.into_slide()
    }

    #[test]
    fn test_append_and_seal_keeps_order() {
        let first = finalized_slide();
        let second = finalized_slide();
        let ids = [first.id(), second.id()];

        let mut assembler = DocumentAssembler::new(metadata());
        assembler.append(first).unwrap();
        assembler.append(second).unwrap();
        assert_eq!(assembler.len(), 2);

        let document = assembler.seal().unwrap();
        assert_eq!(document.len(), 2);
        assert_eq!(document.metadata().title(), "Assembly test");
        assert_eq!(document.metadata().canvas(), Canvas::STANDARD);
        let seen: Vec<_> = document.slides().iter().map(Slide::id).collect();
        assert_eq!(seen, ids);
    }

    #[test]
    fn test_unfinalized_slide_is_rejected() {
        let composer = SlideComposer::new(Theme::midnight());
        let id = composer.id();

        let mut assembler = DocumentAssembler::new(metadata());
        assert_eq!(
            assembler.append(composer.into_slide()),
            Err(ComposeError::SlideNotFinalized(id))
        );
        assert!(assembler.is_empty());
    }

    #[test]
    fn test_clone_of_appended_slide_is_a_duplicate() {
        let slide = finalized_slide();
        let copy = slide.clone();

        let mut assembler = DocumentAssembler::new(metadata());
        assembler.append(slide).unwrap();
        assert_eq!(
            assembler.append(copy.clone()),
            Err(ComposeError::DuplicateAppend(copy.id()))
        );
        assert_eq!(assembler.len(), 1);
    }

    #[test]
    fn test_sealed_document_rejects_changes() {
        let mut assembler = DocumentAssembler::new(metadata());
        let document = assembler.seal().unwrap();
        assert!(document.is_empty());
        assert!(assembler.is_sealed());

        assert_eq!(
            assembler.append(finalized_slide()),
            Err(ComposeError::DocumentSealed)
        );
        assert_eq!(assembler.seal(), Err(ComposeError::DocumentSealed));
    }
}
