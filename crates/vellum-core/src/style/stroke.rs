//! Line and border strokes.
//!
//! Widths are in points. The dashed pattern is expressed as multiples of the
//! stroke width so that a writer can scale it with the line.
//!
//! # Examples
//!
//! ```
//! use vellum_core::style::{StrokeDefinition, StrokeStyle};
//! use vellum_core::color::Color;
//!
//! let mut stroke = StrokeDefinition::new(Color::new("#00E5A0").unwrap(), 2.5);
//! stroke.set_style(StrokeStyle::Dashed);
//! assert_eq!(stroke.style().dash_pattern(), Some([4.0, 3.0]));
//! ```

use crate::color::Color;

/// Whether a stroke is drawn continuous or dashed.
///
/// Lifelines, reply messages and layer frames are dashed; every other
/// border in a deck is solid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    /// 4 on, 3 off, in multiples of the stroke width.
    Dashed,
}

impl StrokeStyle {
    /// Returns the on/off pattern in multiples of the stroke width, or `None` for solid lines.
    pub fn dash_pattern(self) -> Option<[f32; 2]> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some([4.0, 3.0]),
        }
    }

    pub fn is_dashed(self) -> bool {
        self == Self::Dashed
    }
}

/// Color, width and dash style of a line or border.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width in points.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width in points.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stroke_is_solid() {
        let color = Color::new("#2D6A8F").unwrap();
        let stroke = StrokeDefinition::new(color, 1.5);

        assert_eq!(stroke.width(), 1.5);
        assert_eq!(stroke.color(), color);
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
        assert!(!stroke.style().is_dashed());
    }

    #[test]
    fn test_stroke_setters() {
        let mut stroke = StrokeDefinition::new(Color::default(), 1.0);

        stroke.set_color(Color::new("#00E5A0").unwrap());
        stroke.set_width(2.5);
        stroke.set_style(StrokeStyle::Dashed);

        assert_eq!(stroke.color().to_hex(), "#00E5A0");
        assert_eq!(stroke.width(), 2.5);
        assert!(stroke.style().is_dashed());
    }

    #[test]
    fn test_stroke_clone_is_independent() {
        let original = StrokeDefinition::new(Color::default(), 1.0);
        let mut copy = original.clone();
        copy.set_width(4.0);
        assert_eq!(original.width(), 1.0);
    }

    #[test]
    fn test_dash_pattern() {
        assert_eq!(StrokeStyle::Solid.dash_pattern(), None);
        assert_eq!(StrokeStyle::Dashed.dash_pattern(), Some([4.0, 3.0]));
    }
}
