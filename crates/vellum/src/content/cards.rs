//! Card-shaped records.
//!
//! Each card draws a white, shadowed rectangle filling its frame and places
//! its parts at fixed offsets from the frame's top-left corner.

use vellum_core::{
    geometry::Bounds,
    primitive::DrawPrimitive,
    style::{HAlign, TextLayout, TextRole, VAlign},
    theme::palette,
};

use super::{EmitContext, Emitter, TextSpec, card, filled_oval, filled_rect, text};
use crate::compose::ComposeError;

/// Width of the colored bar on the left edge of accented cards.
const ACCENT_WIDTH: f32 = 0.06;

/// A feature highlight: icon bubble, title and two-line description.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCard {
    title: String,
    description: String,
    icon: String,
}

impl FeatureCard {
    pub fn new(title: &str, description: &str, icon: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }
}

impl Emitter for FeatureCard {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        let icon = frame.inset_rect(0.2, 0.25, 0.7, 0.7);
        let text_width = frame.width() - 1.25;

        Ok(vec![
            card(frame, ctx)?,
            filled_rect(
                frame.inset_rect(0.0, 0.0, ACCENT_WIDTH, frame.height()),
                palette::TEAL,
                0,
                ctx,
            )?,
            filled_oval(icon, palette::TEAL, 15, ctx)?,
            text(
                icon,
                &self.icon,
                &TextSpec::new(TextRole::Code)
                    .size(16.0)
                    .color(palette::STEEL_BLUE)
                    .bold(true),
                TextLayout::new(HAlign::Center, VAlign::Middle),
                ctx,
            )?,
            text(
                frame.inset_rect(1.05, 0.12, text_width, 0.35),
                &self.title,
                &TextSpec::new(TextRole::CardTitle),
                TextLayout::flush(),
                ctx,
            )?,
            text(
                frame.inset_rect(1.05, 0.5, text_width, 0.6),
                &self.description,
                &TextSpec::new(TextRole::CardBody),
                TextLayout::flush(),
                ctx,
            )?,
        ])
    }
}

/// A technology entry: category badge, name and optional version.
#[derive(Debug, Clone, PartialEq)]
pub struct StackEntry {
    category: String,
    name: String,
    version: Option<String>,
}

impl StackEntry {
    pub fn new(category: &str, name: &str, version: Option<&str>) -> Self {
        Self {
            category: category.to_string(),
            name: name.to_string(),
            version: version.filter(|v| !v.is_empty()).map(str::to_string),
        }
    }
}

impl Emitter for StackEntry {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        let badge = frame.inset_rect(0.15, 0.18, 1.1, 0.42);

        let mut primitives = vec![
            card(frame, ctx)?,
            filled_rect(badge, palette::STEEL_BLUE, 10, ctx)?,
            text(
                badge,
                &self.category,
                &TextSpec::new(TextRole::Badge),
                TextLayout::new(HAlign::Center, VAlign::Middle),
                ctx,
            )?,
            text(
                frame.inset_rect(1.4, 0.1, 2.0, 0.35),
                &self.name,
                &TextSpec::new(TextRole::CardTitle),
                TextLayout::flush(),
                ctx,
            )?,
        ];

        if let Some(version) = &self.version {
            primitives.push(text(
                frame.inset_rect(1.4, 0.42, 2.5, 0.28),
                version,
                &TextSpec::new(TextRole::Code).color(palette::SUBTLE_GRAY),
                TextLayout::flush(),
                ctx,
            )?);
        }

        Ok(primitives)
    }
}

/// A card with a colored left edge, a title and a one-line description.
///
/// Monospace items use a code font for the title, for file names and
/// commands.
#[derive(Debug, Clone, PartialEq)]
pub struct AccentItem {
    title: String,
    description: String,
    accent: String,
    monospace: bool,
}

impl AccentItem {
    /// Creates a teal-accented item.
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            accent: palette::TEAL.to_string(),
            monospace: false,
        }
    }

    pub fn with_accent(mut self, color: &str) -> Self {
        self.accent = color.to_string();
        self
    }

    pub fn monospace(mut self) -> Self {
        self.monospace = true;
        self
    }
}

impl Emitter for AccentItem {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        let text_width = frame.width() - 0.4;
        let (title_frame, title_spec, body_frame, body_size) = if self.monospace {
            (
                frame.inset_rect(0.25, 0.05, text_width, 0.22),
                TextSpec::new(TextRole::Code)
                    .size(11.0)
                    .color(palette::DARK_NAVY)
                    .bold(true),
                frame.inset_rect(0.25, 0.28, text_width, 0.3),
                9.0,
            )
        } else {
            (
                frame.inset_rect(0.25, 0.05, text_width, 0.25),
                TextSpec::new(TextRole::CardTitle).size(13.0),
                frame.inset_rect(0.25, 0.3, text_width, 0.23),
                10.0,
            )
        };

        Ok(vec![
            card(frame, ctx)?,
            filled_rect(
                frame.inset_rect(0.0, 0.0, ACCENT_WIDTH, frame.height()),
                &self.accent,
                0,
                ctx,
            )?,
            text(title_frame, &self.title, &title_spec, TextLayout::flush(), ctx)?,
            text(
                body_frame,
                &self.description,
                &TextSpec::new(TextRole::CardBody).size(body_size),
                TextLayout::flush(),
                ctx,
            )?,
        ])
    }
}

/// A card led by a small solid badge, such as a test count.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeItem {
    badge: String,
    title: String,
    description: String,
}

impl BadgeItem {
    pub fn new(badge: &str, title: &str, description: &str) -> Self {
        Self {
            badge: badge.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

impl Emitter for BadgeItem {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        let badge = frame.inset_rect(0.15, 0.12, 0.85, 0.34);
        let text_width = frame.width() - 1.3;

        Ok(vec![
            card(frame, ctx)?,
            filled_rect(badge, palette::STEEL_BLUE, 0, ctx)?,
            text(
                badge,
                &self.badge,
                &TextSpec::new(TextRole::Badge).size(8.0),
                TextLayout::centered(),
                ctx,
            )?,
            text(
                frame.inset_rect(1.15, 0.05, text_width, 0.25),
                &self.title,
                &TextSpec::new(TextRole::CardTitle).size(13.0),
                TextLayout::flush(),
                ctx,
            )?,
            text(
                frame.inset_rect(1.15, 0.3, text_width, 0.23),
                &self.description,
                &TextSpec::new(TextRole::CardBody).size(9.0),
                TextLayout::flush(),
                ctx,
            )?,
        ])
    }
}

/// A named box in an architecture diagram.
///
/// Boxes without a caption center their name in the box instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentBox {
    name: String,
    caption: Option<String>,
    compact: bool,
}

impl ComponentBox {
    pub fn new(name: &str, caption: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            caption: caption.map(str::to_string),
            compact: false,
        }
    }

    /// Uses smaller type, for boxes nested inside another layer.
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }
}

impl Emitter for ComponentBox {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        let top_aligned = TextLayout::new(HAlign::Center, VAlign::Top).with_margin(0.0);
        let width = frame.width();

        let Some(caption) = &self.caption else {
            return Ok(vec![
                card(frame, ctx)?,
                text(
                    frame.inset_rect(0.0, 0.05, width, frame.height() - 0.1),
                    &self.name,
                    &TextSpec::new(TextRole::Body)
                        .size(10.0)
                        .color(palette::DARK_NAVY),
                    TextLayout::centered(),
                    ctx,
                )?,
            ]);
        };

        let (name_frame, name_size, caption_frame, caption_size) = if self.compact {
            (
                frame.inset_rect(0.0, 0.05, width, 0.3),
                11.0,
                frame.inset_rect(0.0, 0.33, width, 0.22),
                8.0,
            )
        } else {
            (
                frame.inset_rect(0.0, 0.08, width, 0.32),
                12.0,
                frame.inset_rect(0.0, 0.38, width, 0.25),
                9.0,
            )
        };

        Ok(vec![
            card(frame, ctx)?,
            text(
                name_frame,
                &self.name,
                &TextSpec::new(TextRole::Code)
                    .size(name_size)
                    .color(palette::DARK_NAVY)
                    .bold(true),
                top_aligned,
                ctx,
            )?,
            text(
                caption_frame,
                caption,
                &TextSpec::new(TextRole::Caption).size(caption_size),
                top_aligned,
                ctx,
            )?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use vellum_core::theme::Theme;

    use super::*;

    fn ctx() -> EmitContext<'static> {
        EmitContext::new(Theme::midnight())
    }

    #[test]
    fn test_feature_card_emits_six_primitives() {
        let card = FeatureCard::new("RESTful API", "Clean API endpoint for\ncalculation operations", "{ }");
        let frame = Bounds::new(0.7, 3.95, 4.05, 1.2);
        let primitives = card.emit(frame, &ctx()).unwrap();

        assert_eq!(primitives.len(), 6);
        assert_eq!(primitives[0].bounds(), frame);
        assert_eq!(primitives[2].kind_name(), "oval");

        let title = primitives[4].bounds();
        assert_approx_eq!(f32, title.min_x(), 1.75, epsilon = 1e-5);
        assert_approx_eq!(f32, title.min_y(), 4.07, epsilon = 1e-5);
        assert_approx_eq!(f32, title.width(), 2.8, epsilon = 1e-5);

        let DrawPrimitive::Rectangle(shape) = &primitives[0] else {
            panic!("card must be a rectangle");
        };
        assert_approx_eq!(f32, shape.shadow().unwrap().opacity(), 0.12);
    }

    #[test]
    fn test_stack_entry_version_is_optional() {
        let frame = Bounds::new(0.7, 1.7, 4.1, 0.78);
        let runtime = StackEntry::new("Runtime", "Node.js", Some(""));
        let framework = StackEntry::new("Framework", "Express.js", Some("^4.16.4"));
        let unversioned = StackEntry::new("Runtime", "Deno", None);

        assert_eq!(runtime.emit(frame, &ctx()).unwrap().len(), 4);
        assert_eq!(unversioned.emit(frame, &ctx()).unwrap().len(), 4);
        assert_eq!(framework.emit(frame, &ctx()).unwrap().len(), 5);
    }

    #[test]
    fn test_accent_item_uses_accent_color() {
        let item = AccentItem::new("server.js", "Express server entry point")
            .with_accent(palette::STEEL_BLUE)
            .monospace();
        let primitives = item.emit(Bounds::new(5.3, 1.75, 4.2, 0.62), &ctx()).unwrap();

        assert_eq!(primitives.len(), 4);
        let DrawPrimitive::Rectangle(bar) = &primitives[1] else {
            panic!("accent bar must be a rectangle");
        };
        assert_eq!(bar.fill().unwrap().color().to_hex(), "#2D6A8F");
        assert_approx_eq!(f32, bar.bounds().height(), 0.62);

        let DrawPrimitive::TextBlock(title) = &primitives[2] else {
            panic!("title must be text");
        };
        assert_eq!(title.runs()[0].style().font_face(), "Consolas");
    }

    #[test]
    fn test_accent_item_unknown_color_fails() {
        let item = AccentItem::new("Mocha", "Test runner").with_accent("ultraviolet");
        let result = item.emit(Bounds::new(0.7, 1.75, 4.2, 0.58), &ctx());
        assert!(matches!(result, Err(ComposeError::UnknownColorName(_))));
    }

    #[test]
    fn test_badge_item_emits_five_primitives() {
        let item = BadgeItem::new("5 tests", "Validation", "Missing/invalid operations & operands");
        let primitives = item.emit(Bounds::new(5.3, 1.75, 4.0, 0.58), &ctx()).unwrap();

        assert_eq!(primitives.len(), 5);
        let badge = primitives[1].bounds();
        assert_approx_eq!(f32, badge.min_x(), 5.45, epsilon = 1e-5);
        assert_approx_eq!(f32, badge.min_y(), 1.87, epsilon = 1e-5);
    }

    #[test]
    fn test_component_box() {
        let frame = Bounds::new(7.2, 2.6, 1.8, 0.65);
        let routes = ComponentBox::new("routes.js", Some("Route Definitions")).compact();
        let primitives = routes.emit(frame, &ctx()).unwrap();
        assert_eq!(primitives.len(), 3);
        assert_approx_eq!(f32, primitives[2].bounds().min_y(), 2.93, epsilon = 1e-5);

        let middleware = ComponentBox::new("Static File Middleware", None);
        assert_eq!(middleware.emit(frame, &ctx()).unwrap().len(), 2);
    }
}
