//! The built-in calculator presentation.
//!
//! Every slide is a function from an [`EmitContext`] to a [`SlideContent`]:
//! the background, the chrome and the body primitives. The functions only
//! pick layout specs and content records; all coordinates come out of the
//! calculators in [`crate::layout`] and the emitters in [`crate::content`].

mod architecture;
mod cover;
mod flows;
mod overview;
mod project;

use log::{debug, info};

use vellum_core::{
    primitive::DrawPrimitive,
    theme::{Theme, palette},
};

use crate::{
    compose::{ComposeError, Document, DocumentAssembler, DocumentMetadata, SlideComposer},
    content::{EmitContext, Emitter, TitleBar},
    layout::Canvas,
};

/// The pieces a slide function hands to the composer.
#[derive(Debug)]
pub(crate) struct SlideContent {
    background: &'static str,
    /// Content slides take the configured background override; cover slides keep theirs.
    overridable: bool,
    chrome: Vec<DrawPrimitive>,
    body: Vec<DrawPrimitive>,
}

impl SlideContent {
    /// A content slide: offWhite background under a title bar.
    fn titled(title: &str, ctx: &EmitContext<'_>) -> Result<Self, ComposeError> {
        Ok(Self {
            background: palette::OFF_WHITE,
            overridable: true,
            chrome: TitleBar::new(title).emit(Canvas::STANDARD.bounds(), ctx)?,
            body: Vec::new(),
        })
    }

    /// A cover slide on the given background with pre-built chrome.
    fn cover(background: &'static str, chrome: Vec<DrawPrimitive>) -> Self {
        Self {
            background,
            overridable: false,
            chrome,
            body: Vec::new(),
        }
    }

    fn push(&mut self, primitives: Vec<DrawPrimitive>) {
        self.body.extend(primitives);
    }
}

type SlideFn = fn(&EmitContext<'_>) -> Result<SlideContent, ComposeError>;

const SLIDES: [(&str, SlideFn); 11] = [
    ("title", cover::title),
    ("overview", overview::project_overview),
    ("technology stack", overview::technology_stack),
    ("architecture", architecture::application_architecture),
    ("api design", architecture::api_design),
    ("state machine", flows::state_machine),
    ("request flow", flows::request_flow),
    ("testing", project::testing),
    ("project structure", project::project_structure),
    ("getting started", project::getting_started),
    ("closing", cover::closing),
];

/// Number of slides in the calculator deck.
pub const SLIDE_COUNT: usize = SLIDES.len();

/// Composes every slide of the deck and seals them into a document.
///
/// `background_override` replaces the background of the content slides; the
/// title and closing slides keep their dark background.
///
/// # Errors
///
/// Returns the first [`ComposeError`] raised by an emitter, the composer or
/// the assembler.
pub fn compose(
    theme: &Theme,
    metadata: DocumentMetadata,
    background_override: Option<&str>,
) -> Result<Document, ComposeError> {
    info!(title = metadata.title(), slide_count = SLIDE_COUNT; "Composing deck");

    let ctx = EmitContext::new(theme);
    let mut assembler = DocumentAssembler::new(metadata);

    for (index, (name, build)) in SLIDES.iter().enumerate() {
        let content = build(&ctx)?;

        let mut composer = SlideComposer::new(theme);
        let background = match background_override {
            Some(color) if content.overridable => color,
            _ => content.background,
        };
        composer.set_background(background)?;
        composer.draw_chrome(content.chrome)?;
        composer.draw_body(content.body)?;
        composer.finalize()?;

        debug!(
            slide_index = index,
            slide_name = name,
            slide_id:% = composer.id(),
            background;
            "Deck slide composed"
        );
        assembler.append(composer.into_slide())?;
    }

    let document = assembler.seal()?;
    info!(slide_count = document.len(); "Deck composed");
    Ok(document)
}
