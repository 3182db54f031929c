//! Geometric primitives for slide layout and positioning.
//!
//! This module provides the geometric types used throughout Vellum for
//! calculating positions, sizes and extents of slide primitives.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle defined by minimum and maximum coordinates
//! - [`Segment`] - A line given by an origin and a `(dx, dy)` extent
//!
//! # Coordinate System
//!
//! Canvas units are inches on a fixed 16:9 canvas:
//!
//! ```text
//!   (0,0) ────────► +X (10.0)
//!     │
//!     │
//!     ▼
//!    +Y (5.63)
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

/// A 2D point in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use vellum_core::geometry::Point;
/// let card = Point::new(0.7, 2.55);
/// let icon = card.add_point(Point::new(0.2, 0.25));
/// assert!((icon.x() - 0.9).abs() < 1e-6);
/// assert!((icon.y() - 2.8).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Returns true if both coordinates are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if both dimensions are strictly positive
    pub fn is_positive(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// An axis-aligned rectangle with minimum and maximum coordinates.
///
/// Every box-shaped primitive (rectangle, oval, text block, table) is placed
/// by a `Bounds`; the `x, y, w, h` accessors mirror how slide writers
/// address geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from a top-left corner and explicit width and height
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new_from_top_left(Point::new(x, y), Size::new(width, height))
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Returns the minimum x-coordinate (left edge)
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate (top edge)
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate (right edge)
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate (bottom edge)
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Returns a sub-rectangle placed relative to this bounds' top-left corner.
    ///
    /// Emitters describe their parts (accent bars, icons, labels) as offsets
    /// into the frame they were given; this turns such an offset into
    /// absolute canvas coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vellum_core::geometry::Bounds;
    /// let card = Bounds::new(0.7, 2.55, 4.05, 1.2);
    /// let title = card.inset_rect(1.05, 0.12, 2.8, 0.35);
    /// assert!((title.min_x() - 1.75).abs() < 1e-5);
    /// assert!((title.min_y() - 2.67).abs() < 1e-5);
    /// assert!((title.width() - 2.8).abs() < 1e-5);
    /// ```
    pub fn inset_rect(self, dx: f32, dy: f32, width: f32, height: f32) -> Self {
        Self::new(self.min_x + dx, self.min_y + dy, width, height)
    }

    /// Returns a copy with a different height, keeping the top-left corner
    pub fn with_height(self, height: f32) -> Self {
        Self {
            max_y: self.min_y + height,
            ..self
        }
    }

    /// Moves the bounds by the specified offset
    pub fn translate(self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Returns true if the interiors of both bounds overlap.
    ///
    /// Rectangles that only share an edge do not overlap.
    pub fn overlaps(self, other: Self) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// Returns true if `other` lies entirely within these bounds.
    ///
    /// Edges are inclusive and compared with a small tolerance so that
    /// accumulated `f32` rounding on the canvas border is not reported.
    pub fn contains(self, other: Self) -> bool {
        const TOLERANCE: f32 = 1e-4;
        other.min_x >= self.min_x - TOLERANCE
            && other.min_y >= self.min_y - TOLERANCE
            && other.max_x <= self.max_x + TOLERANCE
            && other.max_y <= self.max_y + TOLERANCE
    }

    /// Returns true if every coordinate is finite and neither dimension is negative
    pub fn is_well_formed(self) -> bool {
        self.min_point().is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
            && self.width() >= 0.0
            && self.height() >= 0.0
    }
}

/// A straight line given by its origin and extent.
///
/// `dx` and `dy` are the signed distances from the origin to the end point.
/// Layout calculators normalize horizontal and vertical segments so that the
/// extent is never negative; see [`Segment::horizontal`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Segment {
    origin: Point,
    dx: f32,
    dy: f32,
}

impl Segment {
    /// Creates a segment from an origin and a signed extent
    pub fn new(origin: Point, dx: f32, dy: f32) -> Self {
        Self { origin, dx, dy }
    }

    /// Creates the segment running from `start` to `end`
    pub fn between(start: Point, end: Point) -> Self {
        Self::new(start, end.x - start.x, end.y - start.y)
    }

    /// Creates a horizontal segment spanning `x1` and `x2` at height `y`.
    ///
    /// The segment always starts at the smaller x and has a non-negative
    /// width, regardless of the order of the two x-coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vellum_core::geometry::Segment;
    /// let forward = Segment::horizontal(1.0, 4.0, 2.0);
    /// let backward = Segment::horizontal(4.0, 1.0, 2.0);
    /// assert_eq!(forward, backward);
    /// assert_eq!(forward.dx(), 3.0);
    /// ```
    pub fn horizontal(x1: f32, x2: f32, y: f32) -> Self {
        Self::new(Point::new(x1.min(x2), y), (x2 - x1).abs(), 0.0)
    }

    /// Creates a vertical segment spanning `y1` and `y2` at `x`
    pub fn vertical(x: f32, y1: f32, y2: f32) -> Self {
        Self::new(Point::new(x, y1.min(y2)), 0.0, (y2 - y1).abs())
    }

    /// Returns the starting point of the segment
    pub fn origin(self) -> Point {
        self.origin
    }

    /// Returns the end point of the segment
    pub fn end(self) -> Point {
        self.origin.add_point(Point::new(self.dx, self.dy))
    }

    /// Returns the signed horizontal extent
    pub fn dx(self) -> f32 {
        self.dx
    }

    /// Returns the signed vertical extent
    pub fn dy(self) -> f32 {
        self.dy
    }

    /// Returns the smallest bounds containing both end points
    pub fn bounds(self) -> Bounds {
        let end = self.end();
        Bounds::new(
            self.origin.x.min(end.x),
            self.origin.y.min(end.y),
            self.dx.abs(),
            self.dy.abs(),
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_add() {
        let result = Point::new(1.0, 2.0).add_point(Point::new(3.0, 4.0));
        assert_eq!(result.x(), 4.0);
        assert_eq!(result.y(), 6.0);
    }

    #[test]
    fn test_point_with_coordinates() {
        let point = Point::new(1.0, 2.0).with_x(5.0).with_y(6.0);
        assert_eq!(point, Point::new(5.0, 6.0));
    }

    #[test]
    fn test_bounds_new() {
        let bounds = Bounds::new(0.5, 1.45, 2.8, 3.7);
        assert_approx_eq!(f32, bounds.min_x(), 0.5);
        assert_approx_eq!(f32, bounds.min_y(), 1.45);
        assert_approx_eq!(f32, bounds.max_x(), 3.3, epsilon = 1e-5);
        assert_approx_eq!(f32, bounds.max_y(), 5.15, epsilon = 1e-5);
        assert_approx_eq!(f32, bounds.width(), 2.8, epsilon = 1e-5);
        assert_approx_eq!(f32, bounds.height(), 3.7, epsilon = 1e-5);
    }

    #[test]
    fn test_bounds_new_from_center() {
        let bounds = Bounds::new_from_center(Point::new(5.0, 3.0), Size::new(2.0, 1.0));
        assert_eq!(bounds.min_x(), 4.0);
        assert_eq!(bounds.min_y(), 2.5);
        assert_eq!(bounds.center(), Point::new(5.0, 3.0));
    }

    #[test]
    fn test_bounds_with_height() {
        let bounds = Bounds::new(1.0, 1.0, 2.0, 2.0).with_height(0.5);
        assert_eq!(bounds.min_y(), 1.0);
        assert_eq!(bounds.height(), 0.5);
        assert_eq!(bounds.width(), 2.0);
    }

    #[test]
    fn test_bounds_translate() {
        let moved = Bounds::new(1.0, 2.0, 3.0, 4.0).translate(Point::new(1.0, -1.0));
        assert_eq!(moved.min_point(), Point::new(2.0, 1.0));
        assert_eq!(moved.to_size(), Size::new(3.0, 4.0));
    }

    #[test]
    fn test_bounds_overlaps() {
        let a = Bounds::new(0.0, 0.0, 2.0, 2.0);
        let b = Bounds::new(1.0, 1.0, 2.0, 2.0);
        let touching = Bounds::new(2.0, 0.0, 1.0, 1.0);
        let apart = Bounds::new(5.0, 5.0, 1.0, 1.0);

        assert!(a.overlaps(b));
        assert!(b.overlaps(a));
        assert!(!a.overlaps(touching));
        assert!(!a.overlaps(apart));
    }

    #[test]
    fn test_bounds_contains() {
        let canvas = Bounds::new(0.0, 0.0, 10.0, 5.63);
        assert!(canvas.contains(Bounds::new(0.0, 0.0, 10.0, 5.63)));
        assert!(canvas.contains(Bounds::new(0.7, 2.55, 4.05, 1.2)));
        assert!(!canvas.contains(Bounds::new(7.5, 1.0, 3.5, 3.5)));
        assert!(!canvas.contains(Bounds::new(-0.5, 2.5, 3.0, 3.0)));
    }

    #[test]
    fn test_bounds_is_well_formed() {
        assert!(Bounds::new(0.0, 0.0, 1.0, 0.0).is_well_formed());
        assert!(!Bounds::new(0.0, 0.0, -1.0, 1.0).is_well_formed());
        assert!(!Bounds::new(f32::NAN, 0.0, 1.0, 1.0).is_well_formed());
    }

    #[test]
    fn test_segment_horizontal_is_direction_independent() {
        let forward = Segment::horizontal(2.95, 6.35, 4.7);
        let reverse = Segment::horizontal(6.35, 2.95, 4.7);

        assert_eq!(forward, reverse);
        assert_approx_eq!(f32, forward.origin().x(), 2.95);
        assert_approx_eq!(f32, forward.dx(), 3.4, epsilon = 1e-5);
        assert_eq!(forward.dy(), 0.0);
    }

    #[test]
    fn test_segment_vertical() {
        let segment = Segment::vertical(1.25, 5.27, 2.15);
        assert_approx_eq!(f32, segment.origin().y(), 2.15);
        assert_approx_eq!(f32, segment.dy(), 3.12, epsilon = 1e-5);
        assert_eq!(segment.dx(), 0.0);
    }

    #[test]
    fn test_segment_between_and_end() {
        let segment = Segment::between(Point::new(2.0, 2.45), Point::new(2.4, 2.45));
        assert_approx_eq!(f32, segment.dx(), 0.4, epsilon = 1e-6);
        assert_eq!(segment.end(), Point::new(2.4, 2.45));
    }

    #[test]
    fn test_segment_bounds_normalizes_negative_extent() {
        let segment = Segment::new(Point::new(5.0, 1.0), -2.0, 0.0);
        let bounds = segment.bounds();
        assert_eq!(bounds.min_x(), 3.0);
        assert_eq!(bounds.width(), 2.0);
        assert_eq!(bounds.height(), 0.0);
    }
}
