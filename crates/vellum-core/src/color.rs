//! Color handling for Vellum slides
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, providing convenience methods for working with colors
//! in theme palettes and rendered primitives.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Colors are `Copy`, so handing one to a primitive never shares state with
/// the theme it was resolved from.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_hex().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string.
    ///
    /// This will parse CSS color strings such as "#0F1B2D", "rgb(15, 27, 45)", "black", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum_core::color::Color;
    ///
    /// let navy = Color::new("#1B2A4A").unwrap();
    /// let white = Color::new("white").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha (opacity) value.
    ///
    /// # Arguments
    ///
    /// * `alpha` - The alpha value to set, between 0.0 (fully transparent)
    ///   and 1.0 (fully opaque)
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum_core::color::Color;
    ///
    /// let teal = Color::new("#00B4D8").unwrap();
    /// let faded = teal.with_alpha(0.5);
    /// assert_eq!(faded.alpha(), 0.5);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (opacity) component of this color, between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns the opaque sRGB value of this color as an uppercase `#RRGGBB` string.
    ///
    /// Alpha is dropped; writers carry opacity separately.
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum_core::color::Color;
    ///
    /// let color = Color::new("#00e5a0").unwrap();
    /// assert_eq!(color.to_hex(), "#00E5A0");
    /// ```
    pub fn to_hex(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        format!("#{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}
