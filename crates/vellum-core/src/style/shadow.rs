//! Outer drop shadows.

use crate::{color::Color, geometry::Point};

/// The two shadow presets used by slide cards and panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowKind {
    /// Soft, close shadow under content cards.
    Card,
    /// Heavier shadow under large panels.
    Panel,
}

impl ShadowKind {
    /// Returns a human-readable name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Panel => "panel",
        }
    }
}

/// An outer shadow cast by a shape.
///
/// `blur` and `offset` are in points, `angle_degrees` is the direction the
/// shadow is cast measured clockwise from the positive x-axis (so 135° falls
/// down and to the left), and `opacity` is a fraction in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowDefinition {
    kind: ShadowKind,
    color: Color,
    blur: f32,
    offset: f32,
    angle_degrees: f32,
    opacity: f32,
}

impl ShadowDefinition {
    /// Creates a shadow from explicit parameters.
    pub fn new(
        kind: ShadowKind,
        color: Color,
        blur: f32,
        offset: f32,
        angle_degrees: f32,
        opacity: f32,
    ) -> Self {
        Self {
            kind,
            color,
            blur,
            offset,
            angle_degrees,
            opacity,
        }
    }

    pub fn kind(&self) -> ShadowKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn blur(&self) -> f32 {
        self.blur
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn angle_degrees(&self) -> f32 {
        self.angle_degrees
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Returns the shadow displacement in points as an `(x, y)` vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum_core::style::{ShadowDefinition, ShadowKind};
    /// use vellum_core::color::Color;
    ///
    /// let shadow = ShadowDefinition::new(ShadowKind::Card, Color::default(), 6.0, 2.0, 90.0, 0.12);
    /// let offset = shadow.offset_vector();
    /// assert!(offset.x().abs() < 1e-5);
    /// assert!((offset.y() - 2.0).abs() < 1e-5);
    /// ```
    pub fn offset_vector(&self) -> Point {
        let radians = self.angle_degrees.to_radians();
        Point::new(self.offset * radians.cos(), self.offset * radians.sin())
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_blur(&mut self, blur: f32) {
        self.blur = blur;
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    pub fn set_angle_degrees(&mut self, angle_degrees: f32) {
        self.angle_degrees = angle_degrees;
    }

    /// Sets the opacity, clamped to `0.0..=1.0`.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn card() -> ShadowDefinition {
        ShadowDefinition::new(ShadowKind::Card, Color::default(), 6.0, 2.0, 135.0, 0.12)
    }

    #[test]
    fn test_offset_vector_points_down_left_at_135() {
        let offset = card().offset_vector();
        assert!(offset.x() < 0.0);
        assert!(offset.y() > 0.0);
        assert_approx_eq!(f32, offset.x().hypot(offset.y()), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_set_opacity_clamps() {
        let mut shadow = card();
        shadow.set_opacity(1.5);
        assert_eq!(shadow.opacity(), 1.0);
        shadow.set_opacity(-0.5);
        assert_eq!(shadow.opacity(), 0.0);
    }

    #[test]
    fn test_setters() {
        let mut shadow = card();
        shadow.set_blur(8.0);
        shadow.set_offset(3.0);
        shadow.set_angle_degrees(45.0);
        shadow.set_color(Color::new("#1B2A4A").unwrap());

        assert_eq!(shadow.blur(), 8.0);
        assert_eq!(shadow.offset(), 3.0);
        assert_eq!(shadow.angle_degrees(), 45.0);
        assert_eq!(shadow.color().to_hex(), "#1B2A4A");
        assert_eq!(shadow.kind(), ShadowKind::Card);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ShadowKind::Card.name(), "card");
        assert_eq!(ShadowKind::Panel.name(), "panel");
    }
}
