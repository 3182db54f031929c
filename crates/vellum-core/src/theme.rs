//! Semantic color themes.
//!
//! A [`Theme`] maps semantic color names (`"darkNavy"`, `"teal"`, ...) to
//! [`Color`] values. It is built once and is read-only afterwards, so a
//! single theme can be shared by reference across any number of composition
//! runs.
//!
//! # Quick Start
//!
//! ```
//! use vellum_core::theme::{Theme, palette};
//!
//! let theme = Theme::midnight();
//! let teal = theme.resolve(palette::TEAL).unwrap();
//! assert_eq!(teal.to_hex(), "#00B4D8");
//!
//! assert!(theme.resolve("magenta").is_err());
//! ```

use std::sync::OnceLock;

use indexmap::IndexMap;
use log::debug;
use thiserror::Error;

use crate::color::Color;

/// Names registered by the built-in [`Theme::midnight`] palette.
pub mod palette {
    pub const DARK_NAVY: &str = "darkNavy";
    pub const NAVY: &str = "navy";
    pub const STEEL_BLUE: &str = "steelBlue";
    pub const TEAL: &str = "teal";
    pub const MINT: &str = "mint";
    pub const LIGHT_GRAY: &str = "lightGray";
    pub const OFF_WHITE: &str = "offWhite";
    pub const WHITE: &str = "white";
    pub const CHARCOAL: &str = "charcoal";
    pub const MED_GRAY: &str = "medGray";
    pub const SUBTLE_GRAY: &str = "subtleGray";
    pub const ERROR_RED: &str = "errorRed";
    pub const WARM_YELLOW: &str = "warmYellow";
}

const MIDNIGHT_ENTRIES: [(&str, &str); 13] = [
    (palette::DARK_NAVY, "#0F1B2D"),
    (palette::NAVY, "#1B2A4A"),
    (palette::STEEL_BLUE, "#2D6A8F"),
    (palette::TEAL, "#00B4D8"),
    (palette::MINT, "#00E5A0"),
    (palette::LIGHT_GRAY, "#EDF2F7"),
    (palette::OFF_WHITE, "#F7FAFC"),
    (palette::WHITE, "#FFFFFF"),
    (palette::CHARCOAL, "#2D3748"),
    (palette::MED_GRAY, "#718096"),
    (palette::SUBTLE_GRAY, "#A0AEC0"),
    (palette::ERROR_RED, "#FC8181"),
    (palette::WARM_YELLOW, "#F6E05E"),
];

static MIDNIGHT: OnceLock<Theme> = OnceLock::new();

/// Errors raised by theme construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A color name that is not registered in the theme was requested.
    #[error("unknown color name `{0}`")]
    UnknownColorName(String),

    /// A palette entry could not be parsed as a color.
    #[error("invalid color for `{name}`: {reason}")]
    InvalidColor { name: String, reason: String },

    /// The name chosen as base surface is not part of the palette.
    #[error("base surface `{0}` is not a registered color name")]
    MissingBaseSurface(String),
}

/// An immutable mapping from semantic color names to colors.
///
/// Entries keep their registration order, which is what [`Theme::names`]
/// reports.
#[derive(Debug, Clone)]
pub struct Theme {
    colors: IndexMap<String, Color>,
    base_surface: String,
}

impl Theme {
    /// Returns the built-in "midnight" palette.
    ///
    /// The palette is parsed on first use and shared for the lifetime of the
    /// process. Its base surface is [`palette::OFF_WHITE`].
    pub fn midnight() -> &'static Self {
        MIDNIGHT.get_or_init(|| {
            Self::from_entries(MIDNIGHT_ENTRIES, palette::OFF_WHITE)
                .expect("built-in palette entries are valid CSS colors")
        })
    }

    /// Builds a theme from `(name, css color)` pairs.
    ///
    /// # Arguments
    ///
    /// * `entries` - Name and CSS color string for every registered color
    /// * `base_surface` - Name of the color used when a slide sets no background
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidColor`] if a color string does not parse,
    /// or [`ThemeError::MissingBaseSurface`] if `base_surface` is not among
    /// the entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum_core::theme::Theme;
    ///
    /// let theme = Theme::from_entries([("paper", "#FFFFFF"), ("ink", "#111111")], "paper").unwrap();
    /// assert_eq!(theme.base_surface().to_hex(), "#FFFFFF");
    /// assert_eq!(theme.names().collect::<Vec<_>>(), vec!["paper", "ink"]);
    /// ```
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
        base_surface: &str,
    ) -> Result<Self, ThemeError> {
        let mut colors = IndexMap::new();
        for (name, value) in entries {
            let color = Color::new(value).map_err(|reason| ThemeError::InvalidColor {
                name: name.to_string(),
                reason,
            })?;
            colors.insert(name.to_string(), color);
        }

        if !colors.contains_key(base_surface) {
            return Err(ThemeError::MissingBaseSurface(base_surface.to_string()));
        }

        debug!(color_count = colors.len(), base_surface = base_surface; "Theme constructed");

        Ok(Self {
            colors,
            base_surface: base_surface.to_string(),
        })
    }

    /// Resolves a semantic color name.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownColorName`] if `name` is not registered.
    pub fn resolve(&self, name: &str) -> Result<Color, ThemeError> {
        self.colors
            .get(name)
            .copied()
            .ok_or_else(|| ThemeError::UnknownColorName(name.to_string()))
    }

    /// Returns true if `name` is a registered color name.
    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    /// Returns the color slides use when no background was set.
    pub fn base_surface(&self) -> Color {
        self.colors[self.base_surface.as_str()]
    }

    /// Returns the name of the base surface color.
    pub fn base_surface_name(&self) -> &str {
        &self.base_surface
    }

    /// Iterates over registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Returns the number of registered colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the theme registers no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midnight_registers_all_names() {
        let theme = Theme::midnight();
        assert_eq!(theme.len(), 13);
        for (name, hex) in MIDNIGHT_ENTRIES {
            assert_eq!(theme.resolve(name).unwrap().to_hex(), hex, "color {name}");
        }
    }

    #[test]
    fn test_midnight_is_shared() {
        assert!(std::ptr::eq(Theme::midnight(), Theme::midnight()));
    }

    #[test]
    fn test_resolve_unknown_name() {
        let err = Theme::midnight().resolve("hotPink").unwrap_err();
        assert_eq!(err, ThemeError::UnknownColorName("hotPink".to_string()));
        assert_eq!(err.to_string(), "unknown color name `hotPink`");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(Theme::midnight().resolve("DarkNavy").is_err());
    }

    #[test]
    fn test_base_surface_is_off_white() {
        let theme = Theme::midnight();
        assert_eq!(theme.base_surface_name(), palette::OFF_WHITE);
        assert_eq!(theme.base_surface().to_hex(), "#F7FAFC");
    }

    #[test]
    fn test_from_entries_rejects_invalid_color() {
        let err = Theme::from_entries([("ink", "not-a-color")], "ink").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor { ref name, .. } if name == "ink"));
    }

    #[test]
    fn test_from_entries_requires_base_surface() {
        let err = Theme::from_entries([("ink", "#000000")], "paper").unwrap_err();
        assert_eq!(err, ThemeError::MissingBaseSurface("paper".to_string()));
    }

    #[test]
    fn test_names_keep_registration_order() {
        let names: Vec<_> = Theme::midnight().names().take(3).collect();
        assert_eq!(names, vec!["darkNavy", "navy", "steelBlue"]);
    }

    #[test]
    fn test_theme_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Theme>();
    }
}
