//! Style descriptors for slide primitives.
//!
//! Every primitive carries its own style values: strokes, shadows, fills and
//! text styles are plain owned structs, cloned or freshly built for each
//! primitive and never shared behind a pointer. A positional or color
//! override applied to one primitive therefore cannot leak into another.
//!
//! # Overview
//!
//! - [`StrokeDefinition`] - Border and line strokes (color, width, dash pattern)
//! - [`ShadowDefinition`] - Outer drop shadows for cards and panels
//! - [`Fill`] - Solid fills with a transparency percentage
//! - [`TextStyle`] / [`TextLayout`] - Run-level font settings and block-level alignment
//! - [`StyleFactory`] - Builds fresh descriptors with the literal parameters of each kind
//!
//! # Quick Start
//!
//! ```
//! use vellum_core::style::{BorderKind, ShadowKind, StyleFactory};
//! use vellum_core::theme::Theme;
//!
//! let factory = StyleFactory::new(Theme::midnight());
//!
//! let mut first = factory.new_shadow(ShadowKind::Card);
//! let second = factory.new_shadow(ShadowKind::Card);
//! first.set_opacity(0.5);
//! assert_eq!(second.opacity(), 0.12);
//!
//! let lifeline = factory.new_border(BorderKind::Lifeline).unwrap();
//! assert_eq!(lifeline.width(), 1.0);
//! ```

mod factory;
mod fill;
mod shadow;
mod stroke;
mod text;

pub use factory::{BorderKind, StyleFactory, TextRole};
pub use fill::Fill;
pub use shadow::{ShadowDefinition, ShadowKind};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{HAlign, TextLayout, TextStyle, VAlign};
