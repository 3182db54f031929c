//! The style factory.
//!
//! [`StyleFactory`] hands out brand-new descriptors on every call, with the
//! literal parameters of the requested kind and colors resolved through a
//! [`Theme`]. Nothing is cached: two calls for the same kind return two
//! independent values, so overriding the transparency or color of one
//! primitive's style is never observable through another primitive.

use crate::{
    color::Color,
    style::{Fill, ShadowDefinition, ShadowKind, StrokeDefinition, StrokeStyle, TextStyle},
    theme::{Theme, ThemeError, palette},
};

/// Border and line presets.
///
/// | Kind | Color | Width (pt) | Dash |
/// |------|-------|------------|------|
/// | `Lifeline` | subtleGray | 1.0 | dashed |
/// | `LayerFrame` | teal | 1.5 | dashed |
/// | `SubLayerFrame` | darkNavy | 1.0 | dashed |
/// | `TableGrid` | lightGray | 0.5 | solid |
/// | `Connector` | medGray | 1.5 | solid |
/// | `Transition` | charcoal | 2.0 | solid |
/// | `Divider` | mint | 2.5 | solid |
/// | `Flow` | teal | 2.5 | solid |
/// | `Message` | steelBlue | 1.5 | solid |
/// | `ReturnMessage` | mint | 1.5 | dashed |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderKind {
    Lifeline,
    LayerFrame,
    SubLayerFrame,
    TableGrid,
    Connector,
    Transition,
    Divider,
    Flow,
    Message,
    ReturnMessage,
}

impl BorderKind {
    fn parameters(self) -> (&'static str, f32, StrokeStyle) {
        match self {
            Self::Lifeline => (palette::SUBTLE_GRAY, 1.0, StrokeStyle::Dashed),
            Self::LayerFrame => (palette::TEAL, 1.5, StrokeStyle::Dashed),
            Self::SubLayerFrame => (palette::DARK_NAVY, 1.0, StrokeStyle::Dashed),
            Self::TableGrid => (palette::LIGHT_GRAY, 0.5, StrokeStyle::Solid),
            Self::Connector => (palette::MED_GRAY, 1.5, StrokeStyle::Solid),
            Self::Transition => (palette::CHARCOAL, 2.0, StrokeStyle::Solid),
            Self::Divider => (palette::MINT, 2.5, StrokeStyle::Solid),
            Self::Flow => (palette::TEAL, 2.5, StrokeStyle::Solid),
            Self::Message => (palette::STEEL_BLUE, 1.5, StrokeStyle::Solid),
            Self::ReturnMessage => (palette::MINT, 1.5, StrokeStyle::Dashed),
        }
    }
}

/// Text presets, one per typographic role on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    /// Large cover-slide title.
    HeroTitle,
    /// Italic line under the cover title.
    HeroSubtitle,
    /// Title inside the title bar of a content slide.
    SlideTitle,
    /// Spaced, uppercase-style heading above a body region.
    SectionLabel,
    /// Italic introduction line under the title bar.
    Lead,
    /// Running paragraph text.
    Body,
    /// Bold heading of a card.
    CardTitle,
    /// Secondary text of a card.
    CardBody,
    /// Small explanatory text.
    Caption,
    /// Bold white text on a colored badge.
    Badge,
    /// Monospaced text for file names, commands and payloads.
    Code,
}

impl TextRole {
    fn parameters(self) -> (&'static str, f32, &'static str, bool, bool, f32) {
        // (font face, size, color, bold, italic, char spacing)
        match self {
            Self::HeroTitle => ("Trebuchet MS", 44.0, palette::WHITE, true, false, 2.0),
            Self::HeroSubtitle => ("Calibri", 20.0, palette::TEAL, false, true, 0.0),
            Self::SlideTitle => ("Trebuchet MS", 30.0, palette::WHITE, true, false, 0.0),
            Self::SectionLabel => ("Trebuchet MS", 10.0, palette::TEAL, true, false, 2.0),
            Self::Lead => ("Calibri", 12.0, palette::MED_GRAY, false, true, 0.0),
            Self::Body => ("Calibri", 13.0, palette::CHARCOAL, false, false, 0.0),
            Self::CardTitle => ("Trebuchet MS", 14.0, palette::DARK_NAVY, true, false, 0.0),
            Self::CardBody => ("Calibri", 11.0, palette::MED_GRAY, false, false, 0.0),
            Self::Caption => ("Calibri", 9.0, palette::MED_GRAY, false, false, 0.0),
            Self::Badge => ("Calibri", 9.0, palette::WHITE, true, false, 0.0),
            Self::Code => ("Consolas", 10.0, palette::WHITE, false, false, 0.0),
        }
    }
}

/// Produces fresh style descriptors bound to a theme.
///
/// The factory itself holds nothing but a shared reference to the theme, so
/// it is `Copy` and can be handed to every emitter of a composition run.
///
/// # Examples
///
/// ```
/// use vellum_core::style::{BorderKind, StyleFactory, TextRole};
/// use vellum_core::theme::{Theme, palette};
///
/// let factory = StyleFactory::new(Theme::midnight());
///
/// let mut server_frame = factory.new_border(BorderKind::LayerFrame).unwrap();
/// server_frame.set_color(factory.color(palette::STEEL_BLUE).unwrap());
///
/// // The override above does not touch later frames.
/// let client_frame = factory.new_border(BorderKind::LayerFrame).unwrap();
/// assert_eq!(client_frame.color().to_hex(), "#00B4D8");
///
/// let title = factory.new_text(TextRole::SlideTitle).unwrap();
/// assert_eq!(title.font_size(), 30.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StyleFactory<'t> {
    theme: &'t Theme,
}

impl<'t> StyleFactory<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self { theme }
    }

    /// Returns the theme colors are resolved against.
    pub fn theme(&self) -> &'t Theme {
        self.theme
    }

    /// Resolves a color name through the theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownColorName`] if `name` is not registered.
    pub fn color(&self, name: &str) -> Result<Color, ThemeError> {
        self.theme.resolve(name)
    }

    /// Returns a new shadow of the given kind.
    ///
    /// Shadows are always black and do not depend on the theme.
    pub fn new_shadow(&self, kind: ShadowKind) -> ShadowDefinition {
        let (blur, offset, opacity) = match kind {
            ShadowKind::Card => (6.0, 2.0, 0.12),
            ShadowKind::Panel => (8.0, 3.0, 0.18),
        };
        ShadowDefinition::new(kind, Color::default(), blur, offset, 135.0, opacity)
    }

    /// Returns a new stroke of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownColorName`] if the theme lacks the color
    /// the preset uses.
    pub fn new_border(&self, kind: BorderKind) -> Result<StrokeDefinition, ThemeError> {
        let (color_name, width, style) = kind.parameters();
        let mut stroke = StrokeDefinition::new(self.color(color_name)?, width);
        stroke.set_style(style);
        Ok(stroke)
    }

    /// Returns a new fill of the named color.
    ///
    /// # Arguments
    ///
    /// * `name` - Theme color name
    /// * `transparency` - Transparency percentage, `0` (opaque) to `100`
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownColorName`] if `name` is not registered.
    pub fn new_fill(&self, name: &str, transparency: u8) -> Result<Fill, ThemeError> {
        Ok(Fill::new(self.color(name)?).with_transparency(transparency))
    }

    /// Returns a new text style for the given role.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownColorName`] if the theme lacks the color
    /// the role uses.
    pub fn new_text(&self, role: TextRole) -> Result<TextStyle, ThemeError> {
        let (font_face, font_size, color_name, bold, italic, char_spacing) = role.parameters();
        let mut style = TextStyle::new(font_face, font_size, self.color(color_name)?);
        style.set_bold(bold);
        style.set_italic(italic);
        style.set_char_spacing(char_spacing);
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn factory() -> StyleFactory<'static> {
        StyleFactory::new(Theme::midnight())
    }

    #[test]
    fn test_shadow_presets() {
        let card = factory().new_shadow(ShadowKind::Card);
        assert_eq!(card.blur(), 6.0);
        assert_eq!(card.offset(), 2.0);
        assert_eq!(card.angle_degrees(), 135.0);
        assert_approx_eq!(f32, card.opacity(), 0.12);

        let panel = factory().new_shadow(ShadowKind::Panel);
        assert_eq!(panel.blur(), 8.0);
        assert_eq!(panel.offset(), 3.0);
        assert_approx_eq!(f32, panel.opacity(), 0.18);
        assert_ne!(card, panel);
    }

    #[test]
    fn test_consecutive_shadows_are_distinct_instances() {
        let factory = factory();
        let first = factory.new_shadow(ShadowKind::Card);
        let second = factory.new_shadow(ShadowKind::Card);

        assert!(!std::ptr::eq(&first, &second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_mutating_shadow_does_not_affect_others() {
        let factory = factory();
        let mut first = factory.new_shadow(ShadowKind::Card);
        let second = factory.new_shadow(ShadowKind::Card);

        first.set_opacity(0.9);
        first.set_offset(10.0);
        first.set_color(Color::new("#FC8181").unwrap());

        assert_approx_eq!(f32, second.opacity(), 0.12);
        assert_eq!(second.offset(), 2.0);
        assert_eq!(second.color().to_hex(), "#000000");

        let third = factory.new_shadow(ShadowKind::Card);
        assert_approx_eq!(f32, third.opacity(), 0.12);
    }

    #[test]
    fn test_mutating_border_does_not_affect_others() {
        let factory = factory();
        let mut first = factory.new_border(BorderKind::Message).unwrap();
        let second = factory.new_border(BorderKind::Message).unwrap();

        first.set_width(9.0);
        first.set_style(StrokeStyle::Dashed);

        assert_eq!(second.width(), 1.5);
        assert_eq!(*second.style(), StrokeStyle::Solid);
        assert_eq!(factory.new_border(BorderKind::Message).unwrap().width(), 1.5);
    }

    #[test]
    fn test_border_presets() {
        let factory = factory();

        let lifeline = factory.new_border(BorderKind::Lifeline).unwrap();
        assert_eq!(lifeline.color().to_hex(), "#A0AEC0");
        assert_eq!(*lifeline.style(), StrokeStyle::Dashed);

        let grid = factory.new_border(BorderKind::TableGrid).unwrap();
        assert_eq!(grid.width(), 0.5);
        assert_eq!(grid.color().to_hex(), "#EDF2F7");

        let ret = factory.new_border(BorderKind::ReturnMessage).unwrap();
        assert_eq!(ret.color().to_hex(), "#00E5A0");
        assert!(ret.style().is_dashed());

        let transition = factory.new_border(BorderKind::Transition).unwrap();
        assert_eq!(transition.width(), 2.0);
    }

    #[test]
    fn test_border_with_incomplete_theme_fails() {
        let theme = Theme::from_entries([("paper", "#FFFFFF")], "paper").unwrap();
        let factory = StyleFactory::new(&theme);

        let err = factory.new_border(BorderKind::Lifeline).unwrap_err();
        assert_eq!(err, ThemeError::UnknownColorName("subtleGray".to_string()));
    }

    #[test]
    fn test_new_fill() {
        let fill = factory().new_fill(palette::TEAL, 92).unwrap();
        assert_eq!(fill.color().to_hex(), "#00B4D8");
        assert_eq!(fill.transparency(), 92);

        assert!(factory().new_fill("nope", 0).is_err());
    }

    #[test]
    fn test_new_text_roles() {
        let factory = factory();

        let label = factory.new_text(TextRole::SectionLabel).unwrap();
        assert_eq!(label.font_face(), "Trebuchet MS");
        assert_eq!(label.char_spacing(), 2.0);
        assert!(label.bold());

        let lead = factory.new_text(TextRole::Lead).unwrap();
        assert!(lead.italic());
        assert_eq!(lead.color().to_hex(), "#718096");

        let code = factory.new_text(TextRole::Code).unwrap();
        assert_eq!(code.font_face(), "Consolas");
    }
}
