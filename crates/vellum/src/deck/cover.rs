//! Title and closing slides.

use vellum_core::{
    geometry::{Bounds, Segment},
    primitive::{DrawPrimitive, ShapePrimitive},
    style::{BorderKind, HAlign, TextLayout, TextRole},
    theme::palette,
};

use super::SlideContent;
use crate::{
    compose::ComposeError,
    content::{EmitContext, Emitter, HeroFrame, TextBox, TextSpec, line},
    layout::Canvas,
};

/// A translucent square turned by 45 degrees.
fn diamond(
    frame: Bounds,
    color: &str,
    transparency: u8,
    ctx: &EmitContext<'_>,
) -> Result<DrawPrimitive, ComposeError> {
    let shape = ShapePrimitive::new(frame)
        .with_fill(ctx.styles().new_fill(color, transparency)?)
        .with_rotation(45.0);
    Ok(DrawPrimitive::Rectangle(shape))
}

pub(super) fn title(ctx: &EmitContext<'_>) -> Result<SlideContent, ComposeError> {
    let chrome = HeroFrame::new()
        .with_footer("February 2026")
        .emit(Canvas::STANDARD.bounds(), ctx)?;
    let mut slide = SlideContent::cover(palette::DARK_NAVY, chrome);

    slide.push(vec![
        diamond(Bounds::new(7.0, 1.0, 2.8, 2.8), palette::STEEL_BLUE, 15, ctx)?,
        diamond(Bounds::new(7.4, 1.5, 2.3, 2.3), palette::TEAL, 30, ctx)?,
    ]);
    slide.push(
        TextBox::new("Node.js Calculator", TextSpec::new(TextRole::HeroTitle))
            .emit(Bounds::new(0.8, 1.4, 7.0, 1.2), ctx)?,
    );
    slide.push(
        TextBox::new(
            "A Modern Web-Based Arithmetic Application",
            TextSpec::new(TextRole::HeroSubtitle),
        )
        .emit(Bounds::new(0.8, 2.6, 6.5, 0.6), ctx)?,
    );
    slide.push(vec![line(
        Segment::horizontal(0.8, 4.3, 3.4),
        BorderKind::Divider,
        ctx,
    )?]);
    slide.push(
        TextBox::new(
            "Built with Express.js  |  RESTful API  |  State Machine UI\n\
             Client-Server Architecture  |  Full Test Coverage",
            TextSpec::new(TextRole::Body).color(palette::SUBTLE_GRAY),
        )
        .emit(Bounds::new(0.8, 3.7, 6.0, 0.8), ctx)?,
    );

    Ok(slide)
}

pub(super) fn closing(ctx: &EmitContext<'_>) -> Result<SlideContent, ComposeError> {
    let chrome = HeroFrame::new().emit(Canvas::STANDARD.bounds(), ctx)?;
    let mut slide = SlideContent::cover(palette::DARK_NAVY, chrome);
    let centered = TextLayout::flush().with_align(HAlign::Center);

    slide.push(vec![
        diamond(Bounds::new(0.3, 2.5, 2.6, 2.6), palette::STEEL_BLUE, 20, ctx)?,
        diamond(Bounds::new(7.3, 0.8, 2.3, 2.3), palette::TEAL, 30, ctx)?,
    ]);
    slide.push(
        TextBox::new(
            "Thank You",
            TextSpec::new(TextRole::HeroTitle).size(48.0).char_spacing(3.0),
        )
        .with_layout(centered)
        .emit(Bounds::new(1.5, 1.5, 7.0, 1.2), ctx)?,
    );
    slide.push(vec![line(
        Segment::horizontal(3.5, 6.5, 2.8),
        BorderKind::Divider,
        ctx,
    )?]);
    slide.push(
        TextBox::new(
            "Node.js Calculator Application",
            TextSpec::new(TextRole::HeroSubtitle).size(18.0),
        )
        .with_layout(centered)
        .emit(Bounds::new(1.5, 3.1, 7.0, 0.5), ctx)?,
    );
    slide.push(
        TextBox::new(
            "Express.js  |  RESTful API  |  State Machine  |  Full Test Suite",
            TextSpec::new(TextRole::Lead)
                .italic(false)
                .color(palette::SUBTLE_GRAY),
        )
        .with_layout(centered)
        .emit(Bounds::new(1.5, 3.8, 7.0, 0.4), ctx)?,
    );

    Ok(slide)
}
