//! The fixed slide canvas.

use std::fmt;

use log::warn;

use vellum_core::{
    geometry::{Bounds, Size},
    primitive::DrawPrimitive,
};

use crate::compose::Slide;

/// The drawable area of a slide, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    size: Size,
}

impl Canvas {
    /// The 16:9 canvas every slide is laid out on.
    pub const STANDARD: Self = Self::new(10.0, 5.63);

    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.width()
    }

    pub fn height(&self) -> f32 {
        self.size.height()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the canvas as bounds anchored at the origin.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width(), self.height())
    }

    /// Lists every primitive of `slide` that leaves the canvas.
    ///
    /// Defects are reported, never fixed: composition does not fail because
    /// of them.
    pub fn validate(&self, slide: &Slide) -> Vec<LayoutDefect> {
        self.validate_primitives(slide.primitives())
    }

    /// Lists every primitive in `primitives` that leaves the canvas.
    pub fn validate_primitives(&self, primitives: &[DrawPrimitive]) -> Vec<LayoutDefect> {
        let canvas = self.bounds();
        primitives
            .iter()
            .enumerate()
            .filter(|(_, primitive)| !canvas.contains(primitive.bounds()))
            .map(|(index, primitive)| {
                let defect = LayoutDefect {
                    index,
                    kind: primitive.kind_name(),
                    bounds: primitive.bounds(),
                };
                warn!(defect:% = defect; "Primitive leaves the canvas");
                defect
            })
            .collect()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A primitive found outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutDefect {
    index: usize,
    kind: &'static str,
    bounds: Bounds,
}

impl LayoutDefect {
    /// Returns the position of the primitive within its slide.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl fmt::Display for LayoutDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{} spans ({:.2}, {:.2})-({:.2}, {:.2})",
            self.kind,
            self.index,
            self.bounds.min_x(),
            self.bounds.min_y(),
            self.bounds.max_x(),
            self.bounds.max_y()
        )
    }
}
