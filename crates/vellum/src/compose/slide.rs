//! Slides and the per-slide composition state machine.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use log::{debug, trace};

use vellum_core::{color::Color, primitive::DrawPrimitive, theme::Theme};

use super::ComposeError;

static NEXT_SLIDE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-wide unique identity of a slide.
///
/// Ids are handed out by [`SlideComposer::new`]. Cloning a slide keeps its
/// id, which is how a document recognizes a slide it already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(u64);

impl SlideId {
    fn next() -> Self {
        Self(NEXT_SLIDE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Composition progress of a slide.
///
/// States are ordered; a composer only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlideState {
    Empty,
    BackgroundSet,
    ChromeDrawn,
    BodyDrawn,
    Finalized,
}

/// One page of a document: a background and ordered primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    id: SlideId,
    background: Color,
    primitives: Vec<DrawPrimitive>,
    state: SlideState,
}

impl Slide {
    pub fn id(&self) -> SlideId {
        self.id
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Returns the primitives in the order they were drawn.
    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn state(&self) -> SlideState {
        self.state
    }

    pub fn is_finalized(&self) -> bool {
        self.state == SlideState::Finalized
    }
}

/// Builds a single [`Slide`].
///
/// The composer moves through `Empty → BackgroundSet → ChromeDrawn →
/// BodyDrawn → Finalized`. Chrome and body may be drawn in any order and any
/// number of times; the state records the furthest stage reached. Once the
/// slide is finalized, every further call fails with
/// [`ComposeError::SlideFinalized`].
///
/// # Examples
///
/// ```
/// use vellum::compose::{SlideComposer, SlideState};
/// use vellum_core::theme::{Theme, palette};
///
/// let mut composer = SlideComposer::new(Theme::midnight());
/// composer.set_background(palette::DARK_NAVY).unwrap();
/// composer.draw_body(Vec::new()).unwrap();
/// composer.finalize().unwrap();
///
/// assert_eq!(composer.state(), SlideState::Finalized);
/// assert!(composer.draw_chrome(Vec::new()).is_err());
/// ```
#[derive(Debug)]
pub struct SlideComposer<'t> {
    theme: &'t Theme,
    slide: Slide,
}

impl<'t> SlideComposer<'t> {
    /// Starts an empty slide on the theme's base surface.
    pub fn new(theme: &'t Theme) -> Self {
        let slide = Slide {
            id: SlideId::next(),
            background: theme.base_surface(),
            primitives: Vec::new(),
            state: SlideState::Empty,
        };
        trace!(slide_id:% = slide.id; "Slide started");
        Self { theme, slide }
    }

    pub fn id(&self) -> SlideId {
        self.slide.id
    }

    pub fn state(&self) -> SlideState {
        self.slide.state
    }

    /// Returns the slide as composed so far.
    pub fn slide(&self) -> &Slide {
        &self.slide
    }

    fn ensure_open(&self) -> Result<(), ComposeError> {
        if self.slide.is_finalized() {
            Err(ComposeError::SlideFinalized(self.slide.id))
        } else {
            Ok(())
        }
    }

    fn advance(&mut self, state: SlideState) {
        self.slide.state = self.slide.state.max(state);
    }

    /// Sets the background to a named theme color.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::SlideFinalized`] after finalization and
    /// [`ComposeError::UnknownColorName`] for a name the theme lacks.
    pub fn set_background(&mut self, name: &str) -> Result<(), ComposeError> {
        self.ensure_open()?;
        self.slide.background = self.theme.resolve(name)?;
        self.advance(SlideState::BackgroundSet);
        Ok(())
    }

    /// Appends decoration primitives such as title bars and accent bands.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::SlideFinalized`] after finalization.
    pub fn draw_chrome(
        &mut self,
        primitives: impl IntoIterator<Item = DrawPrimitive>,
    ) -> Result<(), ComposeError> {
        self.ensure_open()?;
        self.slide.primitives.extend(primitives);
        self.advance(SlideState::ChromeDrawn);
        Ok(())
    }

    /// Appends content primitives.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::SlideFinalized`] after finalization.
    pub fn draw_body(
        &mut self,
        primitives: impl IntoIterator<Item = DrawPrimitive>,
    ) -> Result<(), ComposeError> {
        self.ensure_open()?;
        self.slide.primitives.extend(primitives);
        self.advance(SlideState::BodyDrawn);
        Ok(())
    }

    /// Closes the slide for modification.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::SlideFinalized`] if the slide was already
    /// finalized.
    pub fn finalize(&mut self) -> Result<(), ComposeError> {
        self.ensure_open()?;
        self.slide.state = SlideState::Finalized;
        debug!(
            slide_id:% = self.slide.id,
            primitive_count = self.slide.primitives.len();
            "Slide finalized"
        );
        Ok(())
    }

    /// Releases the slide in whatever state it is in.
    pub fn into_slide(self) -> Slide {
        self.slide
    }
}

#[cfg(test)]
mod tests {
    use vellum_core::{
        geometry::Bounds,
        primitive::ShapePrimitive,
        theme::{ThemeError, palette},
    };

    use super::*;

    fn rect(x: f32) -> DrawPrimitive {
        DrawPrimitive::Rectangle(ShapePrimitive::new(Bounds::new(x, 0.0, 1.0, 1.0)))
    }

    #[test]
    fn test_new_slide_uses_base_surface() {
        let composer = SlideComposer::new(Theme::midnight());
        assert_eq!(composer.state(), SlideState::Empty);
        assert_eq!(composer.slide().background().to_hex(), "#F7FAFC");
        assert!(composer.slide().primitives().is_empty());
    }

    #[test]
    fn test_slide_ids_are_unique() {
        let a = SlideComposer::new(Theme::midnight());
        let b = SlideComposer::new(Theme::midnight());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_full_state_progression() {
        let mut composer = SlideComposer::new(Theme::midnight());

        composer.set_background(palette::DARK_NAVY).unwrap();
        assert_eq!(composer.state(), SlideState::BackgroundSet);

        composer.draw_chrome([rect(0.0)]).unwrap();
        assert_eq!(composer.state(), SlideState::ChromeDrawn);

        composer.draw_body([rect(1.0), rect(2.0)]).unwrap();
        assert_eq!(composer.state(), SlideState::BodyDrawn);

        composer.finalize().unwrap();
        let slide = composer.into_slide();
        assert!(slide.is_finalized());
        assert_eq!(slide.background().to_hex(), "#0F1B2D");
        assert_eq!(slide.primitives().len(), 3);
    }

    #[test]
    fn test_body_before_chrome_is_allowed() {
        let mut composer = SlideComposer::new(Theme::midnight());

        composer.draw_body([rect(1.0)]).unwrap();
        composer.draw_chrome([rect(0.0)]).unwrap();

        assert_eq!(composer.state(), SlideState::BodyDrawn);
        let xs: Vec<_> = composer
            .slide()
            .primitives()
            .iter()
            .map(|p| p.bounds().min_x())
            .collect();
        assert_eq!(xs, vec![1.0, 0.0]);
    }

    #[test]
    fn test_empty_slide_can_be_finalized() {
        let mut composer = SlideComposer::new(Theme::midnight());
        composer.finalize().unwrap();
        assert!(composer.slide().is_finalized());
    }

    #[test]
    fn test_calls_after_finalize_fail() {
        let mut composer = SlideComposer::new(Theme::midnight());
        composer.finalize().unwrap();
        let id = composer.id();

        assert_eq!(
            composer.draw_body([rect(0.0)]),
            Err(ComposeError::SlideFinalized(id))
        );
        assert_eq!(
            composer.draw_chrome([rect(0.0)]),
            Err(ComposeError::SlideFinalized(id))
        );
        assert_eq!(
            composer.set_background(palette::NAVY),
            Err(ComposeError::SlideFinalized(id))
        );
        assert_eq!(composer.finalize(), Err(ComposeError::SlideFinalized(id)));
        assert!(composer.slide().primitives().is_empty());
    }

    #[test]
    fn test_unknown_background_keeps_state() {
        let mut composer = SlideComposer::new(Theme::midnight());
        let err = composer.set_background("sepia").unwrap_err();

        assert_eq!(
            err,
            ComposeError::UnknownColorName(ThemeError::UnknownColorName("sepia".to_string()))
        );
        assert_eq!(composer.state(), SlideState::Empty);
    }
}
