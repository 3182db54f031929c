//! Slide chrome: title bars, accent bands, labels, callouts and frames.

use vellum_core::{
    geometry::Bounds,
    primitive::{DrawPrimitive, ShapePrimitive},
    style::{BorderKind, HAlign, TextLayout, TextRole, VAlign},
    theme::palette,
};

use super::{EmitContext, Emitter, TextSpec, filled_rect, text};
use crate::compose::ComposeError;

const TITLE_BAR_HEIGHT: f32 = 1.1;
const TITLE_ACCENT_HEIGHT: f32 = 0.04;
const HERO_ACCENT_HEIGHT: f32 = 0.06;
const HERO_BAND_HEIGHT: f32 = 0.28;

/// The dark title band at the top of a content slide.
///
/// Emitted into the full canvas frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleBar {
    title: String,
}

impl TitleBar {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

impl Emitter for TitleBar {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        let width = frame.width();
        Ok(vec![
            filled_rect(
                frame.inset_rect(0.0, 0.0, width, TITLE_BAR_HEIGHT),
                palette::DARK_NAVY,
                0,
                ctx,
            )?,
            filled_rect(
                frame.inset_rect(0.0, TITLE_BAR_HEIGHT, width, TITLE_ACCENT_HEIGHT),
                palette::TEAL,
                0,
                ctx,
            )?,
            text(
                frame.inset_rect(0.7, 0.2, 8.0, 0.75),
                &self.title,
                &TextSpec::new(TextRole::SlideTitle),
                TextLayout::new(HAlign::Left, VAlign::Middle).with_margin(0.0),
                ctx,
            )?,
        ])
    }
}

/// Thin accent band on top and a dark band at the bottom of a cover slide.
///
/// Emitted into the full canvas frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeroFrame {
    footer: Option<String>,
}

impl HeroFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a small caption inside the bottom band.
    pub fn with_footer(mut self, footer: &str) -> Self {
        self.footer = Some(footer.to_string());
        self
    }
}

impl Emitter for HeroFrame {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        let width = frame.width();
        let band_y = frame.height() - HERO_BAND_HEIGHT;

        let mut primitives = vec![
            filled_rect(
                frame.inset_rect(0.0, 0.0, width, HERO_ACCENT_HEIGHT),
                palette::TEAL,
                0,
                ctx,
            )?,
            filled_rect(
                frame.inset_rect(0.0, band_y, width, HERO_BAND_HEIGHT),
                palette::NAVY,
                0,
                ctx,
            )?,
        ];

        if let Some(footer) = &self.footer {
            primitives.push(text(
                frame.inset_rect(0.8, band_y, 3.0, HERO_BAND_HEIGHT),
                footer,
                &TextSpec::new(TextRole::Caption).size(10.0),
                TextLayout::new(HAlign::Left, VAlign::Middle).with_margin(0.0),
                ctx,
            )?);
        }

        Ok(primitives)
    }
}

/// A spaced heading above a body region.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLabel {
    text: String,
    spec: TextSpec,
    align: HAlign,
}

impl SectionLabel {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            spec: TextSpec::new(TextRole::SectionLabel),
            align: HAlign::Left,
        }
    }

    pub fn with_spec(mut self, spec: TextSpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn with_align(mut self, align: HAlign) -> Self {
        self.align = align;
        self
    }
}

impl Emitter for SectionLabel {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        Ok(vec![text(
            frame,
            &self.text,
            &self.spec,
            TextLayout::flush().with_align(self.align),
            ctx,
        )?])
    }
}

/// A filled banner with a line of centered text.
#[derive(Debug, Clone, PartialEq)]
pub struct Callout {
    text: String,
    fill: String,
    transparency: u8,
    spec: TextSpec,
    align: HAlign,
}

impl Callout {
    pub fn new(text: &str, fill: &str, transparency: u8) -> Self {
        Self {
            text: text.to_string(),
            fill: fill.to_string(),
            transparency,
            spec: TextSpec::new(TextRole::Body),
            align: HAlign::Center,
        }
    }

    pub fn with_spec(mut self, spec: TextSpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn with_align(mut self, align: HAlign) -> Self {
        self.align = align;
        self
    }
}

impl Emitter for Callout {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        Ok(vec![
            filled_rect(frame, &self.fill, self.transparency, ctx)?,
            text(
                frame,
                &self.text,
                &self.spec,
                TextLayout::new(self.align, VAlign::Middle),
                ctx,
            )?,
        ])
    }
}

/// A dashed, translucent panel grouping the boxes of one architecture layer.
///
/// The frame color tints both the panel fill and its dashed border; the
/// heading is drawn in the same color.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerFrame {
    heading: String,
    caption: Option<String>,
    color: String,
    transparency: u8,
    nested: bool,
}

impl LayerFrame {
    pub fn new(heading: &str, color: &str, transparency: u8) -> Self {
        Self {
            heading: heading.to_string(),
            caption: None,
            color: color.to_string(),
            transparency,
            nested: false,
        }
    }

    pub fn with_caption(mut self, caption: &str) -> Self {
        self.caption = Some(caption.to_string());
        self
    }

    /// Draws the frame as a layer nested inside another one.
    pub fn nested(mut self) -> Self {
        self.nested = true;
        self
    }
}

impl Emitter for LayerFrame {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        let (border_kind, heading_height, heading_size) = if self.nested {
            (BorderKind::SubLayerFrame, 0.3, 9.0)
        } else {
            (BorderKind::LayerFrame, 0.35, 10.0)
        };

        let mut border = ctx.styles().new_border(border_kind)?;
        border.set_color(ctx.color(&self.color)?);
        let panel = ShapePrimitive::new(frame)
            .with_fill(ctx.styles().new_fill(&self.color, self.transparency)?)
            .with_border(border);

        let top_aligned = TextLayout::new(HAlign::Center, VAlign::Top).with_margin(0.0);
        let width = frame.width();

        let mut primitives = vec![
            DrawPrimitive::Rectangle(panel),
            text(
                frame.inset_rect(0.0, 0.05, width, heading_height),
                &self.heading,
                &TextSpec::new(TextRole::SectionLabel)
                    .size(heading_size)
                    .color(&self.color),
                top_aligned,
                ctx,
            )?,
        ];

        if let Some(caption) = &self.caption {
            primitives.push(text(
                frame.inset_rect(0.0, 0.33, width, 0.22),
                caption,
                &TextSpec::new(TextRole::Caption),
                top_aligned,
                ctx,
            )?);
        }

        Ok(primitives)
    }
}

/// Free-standing text in a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    text: String,
    spec: TextSpec,
    layout: TextLayout,
}

impl TextBox {
    pub fn new(text: &str, spec: TextSpec) -> Self {
        Self {
            text: text.to_string(),
            spec,
            layout: TextLayout::flush(),
        }
    }

    pub fn with_layout(mut self, layout: TextLayout) -> Self {
        self.layout = layout;
        self
    }
}

impl Emitter for TextBox {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        Ok(vec![text(frame, &self.text, &self.spec, self.layout, ctx)?])
    }
}
