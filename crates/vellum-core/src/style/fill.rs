//! Solid fills.

use crate::color::Color;

/// A solid fill with a transparency percentage.
///
/// Transparency follows the slide-authoring convention: `0` is fully opaque
/// and `100` is fully transparent.
///
/// # Examples
///
/// ```
/// use vellum_core::style::Fill;
/// use vellum_core::color::Color;
///
/// let fill = Fill::new(Color::new("#00B4D8").unwrap()).with_transparency(15);
/// assert_eq!(fill.transparency(), 15);
/// assert!((fill.opacity() - 0.85).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    color: Color,
    transparency: u8,
}

impl Fill {
    /// Creates an opaque fill.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            transparency: 0,
        }
    }

    /// Returns a copy with the given transparency, clamped to `0..=100`.
    pub fn with_transparency(mut self, transparency: u8) -> Self {
        self.set_transparency(transparency);
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn transparency(&self) -> u8 {
        self.transparency
    }

    /// Returns the opacity fraction implied by the transparency.
    pub fn opacity(&self) -> f32 {
        1.0 - f32::from(self.transparency) / 100.0
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the transparency, clamped to `0..=100`.
    pub fn set_transparency(&mut self, transparency: u8) {
        self.transparency = transparency.min(100);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_opaque() {
        let fill = Fill::new(Color::default());
        assert_eq!(fill.transparency(), 0);
        assert_eq!(fill.opacity(), 1.0);
    }

    #[test]
    fn test_transparency_is_clamped() {
        let fill = Fill::new(Color::default()).with_transparency(250);
        assert_eq!(fill.transparency(), 100);
        assert_eq!(fill.opacity(), 0.0);
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Fill::new(Color::default());
        let mut copy = original;
        copy.set_transparency(92);
        copy.set_color(Color::new("#2D6A8F").unwrap());
        assert_eq!(original.transparency(), 0);
        assert_eq!(original.color().to_hex(), "#000000");
    }
}
