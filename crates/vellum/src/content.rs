//! Primitive emitters.
//!
//! An [`Emitter`] turns one content record and the frame a layout calculator
//! assigned to it into draw primitives with absolute coordinates. Emitters
//! are pure: they read the theme through an [`EmitContext`], take fresh
//! styles from its [`StyleFactory`] and return new primitives. They never
//! mutate the theme, a style they did not create or another emitter's
//! output.
//!
//! # Overview
//!
//! - Cards: [`FeatureCard`], [`StackEntry`], [`AccentItem`], [`BadgeItem`], [`ComponentBox`]
//! - Diagrams: [`StateNode`], [`StateFlow`], [`Participant`], [`SequenceStep`], [`SequenceDiagram`]
//! - Code: [`FileTreeLine`], [`CommandStep`], [`CodePanel`]
//! - Tables: [`TableSpec`]
//! - Chrome: [`TitleBar`], [`HeroFrame`], [`SectionLabel`], [`Callout`], [`LayerFrame`], [`TextBox`]

mod cards;
mod chrome;
mod code;
mod diagram;
mod table;

pub use cards::{AccentItem, BadgeItem, ComponentBox, FeatureCard, StackEntry};
pub use chrome::{Callout, HeroFrame, LayerFrame, SectionLabel, TextBox, TitleBar};
pub use code::{CodePanel, CodeSpan, CommandStep, FileTreeLine};
pub use diagram::{
    MessageDirection, Participant, SequenceDiagram, SequenceStep, StateFlow, StateNode,
};
pub use table::{ColumnStyle, TableSpec};

use log::trace;

use vellum_core::{
    color::Color,
    geometry::{Bounds, Segment},
    primitive::{DrawPrimitive, LinePrimitive, ShapePrimitive, TextBlock},
    style::{BorderKind, ShadowKind, StyleFactory, TextLayout, TextRole, TextStyle},
    theme::{Theme, palette},
};

use crate::compose::ComposeError;

/// Read-only inputs shared by every emitter of a composition run.
#[derive(Debug, Clone, Copy)]
pub struct EmitContext<'t> {
    theme: &'t Theme,
    styles: StyleFactory<'t>,
}

impl<'t> EmitContext<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            styles: StyleFactory::new(theme),
        }
    }

    pub fn theme(&self) -> &'t Theme {
        self.theme
    }

    /// Returns the factory handing out fresh style descriptors.
    pub fn styles(&self) -> &StyleFactory<'t> {
        &self.styles
    }

    /// Resolves a theme color.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::UnknownColorName`] for names the theme lacks.
    pub fn color(&self, name: &str) -> Result<Color, ComposeError> {
        Ok(self.theme.resolve(name)?)
    }
}

/// Turns a content record and its frame into draw primitives.
pub trait Emitter {
    /// Emits the primitives of this record inside `frame`.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError`] when a style references an unknown color, a
    /// layout spec rejects the record or the record itself is malformed.
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError>;
}

/// Emits `records` into `frames`, pairing them in order.
///
/// Emission stops at the shorter of the two sequences.
///
/// # Errors
///
/// Returns the first error any record raises.
pub fn emit_all<'a, E: Emitter + 'a>(
    records: impl IntoIterator<Item = &'a E>,
    frames: impl IntoIterator<Item = Bounds>,
    ctx: &EmitContext<'_>,
) -> Result<Vec<DrawPrimitive>, ComposeError> {
    let mut primitives = Vec::new();
    for (record, frame) in records.into_iter().zip(frames) {
        primitives.extend(record.emit(frame, ctx)?);
    }
    trace!(primitive_count = primitives.len(); "Records emitted");
    Ok(primitives)
}

/// A text style described as a role plus overrides.
///
/// Records store a `TextSpec` instead of a finished [`TextStyle`] so that
/// the color can stay a theme name until emission.
///
/// # Examples
///
/// ```
/// use vellum::content::{EmitContext, TextSpec};
/// use vellum_core::style::TextRole;
/// use vellum_core::theme::{Theme, palette};
///
/// let ctx = EmitContext::new(Theme::midnight());
/// let style = TextSpec::new(TextRole::Code)
///     .size(7.0)
///     .color(palette::STEEL_BLUE)
///     .resolve(&ctx)
///     .unwrap();
/// assert_eq!(style.font_face(), "Consolas");
/// assert_eq!(style.font_size(), 7.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    role: TextRole,
    face: Option<&'static str>,
    size: Option<f32>,
    color: Option<String>,
    bold: Option<bool>,
    italic: Option<bool>,
    char_spacing: Option<f32>,
}

impl TextSpec {
    pub fn new(role: TextRole) -> Self {
        Self {
            role,
            face: None,
            size: None,
            color: None,
            bold: None,
            italic: None,
            char_spacing: None,
        }
    }

    pub fn face(mut self, face: &'static str) -> Self {
        self.face = Some(face);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Overrides the color with a theme color name.
    pub fn color(mut self, name: &str) -> Self {
        self.color = Some(name.to_string());
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn char_spacing(mut self, spacing: f32) -> Self {
        self.char_spacing = Some(spacing);
        self
    }

    /// Builds a fresh [`TextStyle`] for this spec.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::UnknownColorName`] if the role's color or the
    /// override color is not in the theme.
    pub fn resolve(&self, ctx: &EmitContext<'_>) -> Result<TextStyle, ComposeError> {
        let mut style = ctx.styles().new_text(self.role)?;
        if let Some(face) = self.face {
            style.set_font_face(face);
        }
        if let Some(size) = self.size {
            style.set_font_size(size);
        }
        if let Some(name) = &self.color {
            style.set_color(ctx.color(name)?);
        }
        if let Some(bold) = self.bold {
            style.set_bold(bold);
        }
        if let Some(italic) = self.italic {
            style.set_italic(italic);
        }
        if let Some(spacing) = self.char_spacing {
            style.set_char_spacing(spacing);
        }
        Ok(style)
    }
}

/// A white card with the card shadow.
fn card(frame: Bounds, ctx: &EmitContext<'_>) -> Result<DrawPrimitive, ComposeError> {
    let shape = ShapePrimitive::new(frame)
        .with_fill(ctx.styles().new_fill(palette::WHITE, 0)?)
        .with_shadow(ctx.styles().new_shadow(ShadowKind::Card));
    Ok(DrawPrimitive::Rectangle(shape))
}

/// A borderless rectangle filled with a theme color.
pub fn filled_rect(
    frame: Bounds,
    color: &str,
    transparency: u8,
    ctx: &EmitContext<'_>,
) -> Result<DrawPrimitive, ComposeError> {
    let fill = ctx.styles().new_fill(color, transparency)?;
    Ok(DrawPrimitive::Rectangle(ShapePrimitive::new(frame).with_fill(fill)))
}

/// A borderless oval filled with a theme color.
fn filled_oval(
    frame: Bounds,
    color: &str,
    transparency: u8,
    ctx: &EmitContext<'_>,
) -> Result<DrawPrimitive, ComposeError> {
    let fill = ctx.styles().new_fill(color, transparency)?;
    Ok(DrawPrimitive::Oval(ShapePrimitive::new(frame).with_fill(fill)))
}

/// A straight line with one of the preset strokes.
pub fn line(
    segment: Segment,
    kind: BorderKind,
    ctx: &EmitContext<'_>,
) -> Result<DrawPrimitive, ComposeError> {
    let stroke = ctx.styles().new_border(kind)?;
    Ok(DrawPrimitive::Line(LinePrimitive::new(segment, stroke)))
}

/// A single-run text block.
fn text(
    frame: Bounds,
    content: &str,
    spec: &TextSpec,
    layout: TextLayout,
    ctx: &EmitContext<'_>,
) -> Result<DrawPrimitive, ComposeError> {
    Ok(DrawPrimitive::TextBlock(TextBlock::single(
        frame,
        content,
        spec.resolve(ctx)?,
        layout,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_spec_overrides() {
        let ctx = EmitContext::new(Theme::midnight());
        let style = TextSpec::new(TextRole::CardTitle)
            .face("Consolas")
            .size(11.0)
            .bold(false)
            .italic(true)
            .char_spacing(1.0)
            .color(palette::TEAL)
            .resolve(&ctx)
            .unwrap();

        assert_eq!(style.font_face(), "Consolas");
        assert_eq!(style.font_size(), 11.0);
        assert!(!style.bold());
        assert!(style.italic());
        assert_eq!(style.char_spacing(), 1.0);
        assert_eq!(style.color().to_hex(), "#00B4D8");
    }

    #[test]
    fn test_text_spec_unknown_color() {
        let ctx = EmitContext::new(Theme::midnight());
        let err = TextSpec::new(TextRole::Body).color("plum").resolve(&ctx).unwrap_err();
        assert!(matches!(err, ComposeError::UnknownColorName(_)));
    }

    #[test]
    fn test_emit_all_pairs_records_with_frames() {
        let ctx = EmitContext::new(Theme::midnight());
        let cards = [
            ComponentBox::new("index.html", Some("Calculator UI")),
            ComponentBox::new("client.js", Some("State Machine")),
        ];
        let frames = [
            Bounds::new(0.85, 2.15, 2.1, 0.7),
            Bounds::new(0.85, 3.0, 2.1, 0.7),
            Bounds::new(0.85, 3.85, 2.1, 0.7),
        ];

        let primitives = emit_all(&cards, frames, &ctx).unwrap();
        assert_eq!(primitives.len(), 6);
        assert_eq!(primitives[3].bounds().min_y(), 3.0);
    }

    #[test]
    fn test_filled_rect_styles_are_not_shared() {
        let ctx = EmitContext::new(Theme::midnight());
        let mut first = filled_rect(Bounds::new(0.0, 0.0, 1.0, 1.0), palette::TEAL, 0, &ctx).unwrap();
        let second = filled_rect(Bounds::new(0.0, 0.0, 1.0, 1.0), palette::TEAL, 0, &ctx).unwrap();

        if let DrawPrimitive::Rectangle(shape) = &mut first {
            shape.fill_mut().unwrap().set_transparency(92);
        }
        let DrawPrimitive::Rectangle(shape) = second else {
            panic!("expected a rectangle");
        };
        assert_eq!(shape.fill().unwrap().transparency(), 0);
    }
}
