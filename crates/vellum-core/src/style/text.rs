//! Text styling: run-level font settings and block-level layout.
//!
//! A text block is made of runs. Each run carries a [`TextStyle`] (font,
//! size, color, weight), while the block as a whole carries a [`TextLayout`]
//! (alignment, inner margin, line spacing).

use crate::color::Color;

/// Horizontal alignment of text inside its block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical alignment of text inside its block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Font settings for a run of text.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font face | `"Calibri"` |
/// | Font size | `12` pt |
/// | Color | black |
/// | Bold / italic | `false` |
/// | Character spacing | `0` pt |
///
/// # Examples
///
/// ```
/// # use vellum_core::style::TextStyle;
/// # use vellum_core::color::Color;
/// let mut style = TextStyle::new("Trebuchet MS", 30.0, Color::new("#FFFFFF").unwrap());
/// style.set_bold(true);
/// assert!(style.bold());
/// assert_eq!(style.font_face(), "Trebuchet MS");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    font_face: String,
    font_size: f32,
    color: Color,
    bold: bool,
    italic: bool,
    char_spacing: f32,
}

impl TextStyle {
    /// Creates a regular-weight style.
    pub fn new(font_face: &str, font_size: f32, color: Color) -> Self {
        Self {
            font_face: font_face.to_string(),
            font_size,
            color,
            ..Self::default()
        }
    }

    pub fn font_face(&self) -> &str {
        &self.font_face
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn italic(&self) -> bool {
        self.italic
    }

    /// Returns the extra spacing between characters in points.
    pub fn char_spacing(&self) -> f32 {
        self.char_spacing
    }

    pub fn set_font_face(&mut self, font_face: &str) {
        self.font_face = font_face.to_string();
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    pub fn set_italic(&mut self, italic: bool) {
        self.italic = italic;
    }

    pub fn set_char_spacing(&mut self, char_spacing: f32) {
        self.char_spacing = char_spacing;
    }

    /// Returns a copy with a different font size.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Returns a copy with a different color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns a copy with a different font face.
    pub fn with_font_face(mut self, font_face: &str) -> Self {
        self.set_font_face(font_face);
        self
    }

    /// Returns a copy with the given weight.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_face: String::from("Calibri"),
            font_size: 12.0,
            color: Color::default(),
            bold: false,
            italic: false,
            char_spacing: 0.0,
        }
    }
}

/// Block-level layout of a text box.
///
/// `margin` is the inner padding in points; `None` leaves it to the writer's
/// default. `line_spacing` is a multiple of the font's line height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayout {
    align: HAlign,
    valign: VAlign,
    margin: Option<f32>,
    line_spacing: f32,
}

impl TextLayout {
    pub fn new(align: HAlign, valign: VAlign) -> Self {
        Self {
            align,
            valign,
            ..Self::default()
        }
    }

    /// Centered both horizontally and vertically, without inner margin.
    pub fn centered() -> Self {
        Self::new(HAlign::Center, VAlign::Middle).with_margin(0.0)
    }

    /// Top-left aligned, without inner margin.
    pub fn flush() -> Self {
        Self::default().with_margin(0.0)
    }

    pub fn align(&self) -> HAlign {
        self.align
    }

    pub fn valign(&self) -> VAlign {
        self.valign
    }

    pub fn margin(&self) -> Option<f32> {
        self.margin
    }

    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    pub fn with_align(mut self, align: HAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_valign(mut self, valign: VAlign) -> Self {
        self.valign = valign;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_line_spacing(mut self, line_spacing: f32) -> Self {
        self.line_spacing = line_spacing;
        self
    }
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            align: HAlign::Left,
            valign: VAlign::Top,
            margin: None,
            line_spacing: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.font_face(), "Calibri");
        assert_eq!(style.font_size(), 12.0);
        assert!(!style.bold());
        assert!(!style.italic());
    }

    #[test]
    fn test_text_style_builders() {
        let style = TextStyle::default()
            .with_font_face("Consolas")
            .with_font_size(9.0)
            .with_bold(true);
        assert_eq!(style.font_face(), "Consolas");
        assert_eq!(style.font_size(), 9.0);
        assert!(style.bold());
    }

    #[test]
    fn test_text_style_setters() {
        let mut style = TextStyle::default();
        style.set_italic(true);
        style.set_char_spacing(2.0);
        style.set_color(Color::new("#718096").unwrap());
        assert!(style.italic());
        assert_eq!(style.char_spacing(), 2.0);
        assert_eq!(style.color().to_hex(), "#718096");
    }

    #[test]
    fn test_text_layout_presets() {
        let centered = TextLayout::centered();
        assert_eq!(centered.align(), HAlign::Center);
        assert_eq!(centered.valign(), VAlign::Middle);
        assert_eq!(centered.margin(), Some(0.0));

        let flush = TextLayout::flush();
        assert_eq!(flush.align(), HAlign::Left);
        assert_eq!(flush.valign(), VAlign::Top);
        assert_eq!(flush.line_spacing(), 1.0);
    }
}
