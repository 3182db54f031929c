//! Draw primitives.
//!
//! A [`DrawPrimitive`] is one atomic drawable unit placed at absolute canvas
//! coordinates. Every primitive owns its style values outright: nothing in
//! this module is reference counted, so two primitives can never share a
//! mutable style.
//!
//! # Overview
//!
//! - [`ShapePrimitive`] - Rectangle or oval with optional fill, border and shadow
//! - [`LinePrimitive`] - A straight stroked segment
//! - [`TextBlock`] - A box holding one or more styled [`TextRun`]s
//! - [`Table`] - A cell matrix with per-column widths and per-row heights

use crate::{
    geometry::{Bounds, Point, Segment},
    style::{Fill, HAlign, ShadowDefinition, StrokeDefinition, TextLayout, TextStyle},
};

/// A tagged drawable with absolute geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    Rectangle(ShapePrimitive),
    Oval(ShapePrimitive),
    Line(LinePrimitive),
    TextBlock(TextBlock),
    Table(Table),
}

impl DrawPrimitive {
    /// Returns the smallest bounds enclosing the primitive.
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Rectangle(shape) | Self::Oval(shape) => shape.bounds(),
            Self::Line(line) => line.segment().bounds(),
            Self::TextBlock(text) => text.bounds(),
            Self::Table(table) => table.bounds(),
        }
    }

    /// Returns the name of the variant, for logs and diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Rectangle(_) => "rectangle",
            Self::Oval(_) => "oval",
            Self::Line(_) => "line",
            Self::TextBlock(_) => "text",
            Self::Table(_) => "table",
        }
    }

    /// Returns true if the geometry is finite and has no negative extent.
    ///
    /// Lines may run in any direction, so only their end points are checked
    /// for finiteness.
    pub fn is_well_formed(&self) -> bool {
        match self {
            Self::Line(line) => {
                line.segment().origin().is_finite() && line.segment().end().is_finite()
            }
            Self::Table(table) => {
                table.bounds().is_well_formed()
                    && table.column_widths().iter().all(|w| w.is_finite() && *w >= 0.0)
                    && table.row_heights().iter().all(|h| h.is_finite() && *h >= 0.0)
            }
            other => other.bounds().is_well_formed(),
        }
    }
}

/// A box-shaped primitive: the payload of rectangles and ovals.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePrimitive {
    bounds: Bounds,
    fill: Option<Fill>,
    border: Option<StrokeDefinition>,
    shadow: Option<ShadowDefinition>,
    rotation: f32,
}

impl ShapePrimitive {
    /// Creates an unfilled, borderless shape.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            fill: None,
            border: None,
            shadow: None,
            rotation: 0.0,
        }
    }

    /// Rotates the shape clockwise around its center.
    ///
    /// The reported [`bounds`](Self::bounds) stay those of the unrotated frame.
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_border(mut self, border: StrokeDefinition) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_shadow(mut self, shadow: ShadowDefinition) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn fill(&self) -> Option<&Fill> {
        self.fill.as_ref()
    }

    pub fn border(&self) -> Option<&StrokeDefinition> {
        self.border.as_ref()
    }

    pub fn shadow(&self) -> Option<&ShadowDefinition> {
        self.shadow.as_ref()
    }

    /// Returns the clockwise rotation in degrees.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Returns a mutable handle on the fill, if one is set.
    pub fn fill_mut(&mut self) -> Option<&mut Fill> {
        self.fill.as_mut()
    }

    pub fn border_mut(&mut self) -> Option<&mut StrokeDefinition> {
        self.border.as_mut()
    }

    pub fn shadow_mut(&mut self) -> Option<&mut ShadowDefinition> {
        self.shadow.as_mut()
    }
}

/// A straight line.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    segment: Segment,
    stroke: StrokeDefinition,
}

impl LinePrimitive {
    pub fn new(segment: Segment, stroke: StrokeDefinition) -> Self {
        Self { segment, stroke }
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn stroke_mut(&mut self) -> &mut StrokeDefinition {
        &mut self.stroke
    }
}

/// A run of uniformly styled text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    text: String,
    style: TextStyle,
    break_after: bool,
}

impl TextRun {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            break_after: false,
        }
    }

    /// Ends the current line after this run.
    pub fn with_break(mut self) -> Self {
        self.break_after = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn break_after(&self) -> bool {
        self.break_after
    }
}

/// A positioned text box.
///
/// # Examples
///
/// ```
/// use vellum_core::geometry::Bounds;
/// use vellum_core::primitive::{TextBlock, TextRun};
/// use vellum_core::style::{TextLayout, TextStyle};
///
/// let block = TextBlock::new(Bounds::new(0.5, 0.3, 9.0, 0.6), TextLayout::flush())
///     .with_run(TextRun::new("Node.js ", TextStyle::default()))
///     .with_run(TextRun::new("Calculator", TextStyle::default().with_bold(true)));
/// assert_eq!(block.text(), "Node.js Calculator");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    bounds: Bounds,
    runs: Vec<TextRun>,
    layout: TextLayout,
    fill: Option<Fill>,
}

impl TextBlock {
    /// Creates an empty text block.
    pub fn new(bounds: Bounds, layout: TextLayout) -> Self {
        Self {
            bounds,
            runs: Vec::new(),
            layout,
            fill: None,
        }
    }

    /// Creates a block holding a single run.
    pub fn single(
        bounds: Bounds,
        text: impl Into<String>,
        style: TextStyle,
        layout: TextLayout,
    ) -> Self {
        Self::new(bounds, layout).with_run(TextRun::new(text, style))
    }

    pub fn with_run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }

    /// Sets a background fill behind the text.
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn push_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    pub fn fill(&self) -> Option<&Fill> {
        self.fill.as_ref()
    }

    /// Returns the concatenated text of all runs, with line breaks as `\n`.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for run in &self.runs {
            out.push_str(run.text());
            if run.break_after() {
                out.push('\n');
            }
        }
        out
    }

    /// Groups runs into lines, splitting after every run marked with a break.
    pub fn lines(&self) -> Vec<&[TextRun]> {
        let mut lines = Vec::new();
        let mut start = 0;
        for (idx, run) in self.runs.iter().enumerate() {
            if run.break_after() {
                lines.push(&self.runs[start..=idx]);
                start = idx + 1;
            }
        }
        if start < self.runs.len() {
            lines.push(&self.runs[start..]);
        }
        lines
    }
}

/// One cell of a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    text: String,
    style: TextStyle,
    fill: Option<Fill>,
    align: HAlign,
}

impl TableCell {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            fill: None,
            align: HAlign::Left,
        }
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_align(mut self, align: HAlign) -> Self {
        self.align = align;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn fill(&self) -> Option<&Fill> {
        self.fill.as_ref()
    }

    pub fn align(&self) -> HAlign {
        self.align
    }
}

/// A grid of text cells.
///
/// The table's extent is the sum of its column widths by the sum of its row
/// heights, measured from `origin`. Callers are expected to pass a
/// rectangular cell matrix whose dimensions agree with the width and height
/// lists; the table emitter checks this before building one.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    origin: Point,
    column_widths: Vec<f32>,
    row_heights: Vec<f32>,
    cells: Vec<Vec<TableCell>>,
    border: StrokeDefinition,
}

impl Table {
    pub fn new(
        origin: Point,
        column_widths: Vec<f32>,
        row_heights: Vec<f32>,
        cells: Vec<Vec<TableCell>>,
        border: StrokeDefinition,
    ) -> Self {
        Self {
            origin,
            column_widths,
            row_heights,
            cells,
            border,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.origin.x(),
            self.origin.y(),
            self.column_widths.iter().sum(),
            self.row_heights.iter().sum(),
        )
    }

    pub fn column_widths(&self) -> &[f32] {
        &self.column_widths
    }

    pub fn row_heights(&self) -> &[f32] {
        &self.row_heights
    }

    pub fn rows(&self) -> &[Vec<TableCell>] {
        &self.cells
    }

    pub fn border(&self) -> &StrokeDefinition {
        &self.border
    }

    /// Returns the number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    /// Returns the bounds of the cell at `row`, `col`, or `None` when out of range.
    pub fn cell_bounds(&self, row: usize, col: usize) -> Option<Bounds> {
        let width = *self.column_widths.get(col)?;
        let height = *self.row_heights.get(row)?;
        let x = self.origin.x() + self.column_widths[..col].iter().sum::<f32>();
        let y = self.origin.y() + self.row_heights[..row].iter().sum::<f32>();
        Some(Bounds::new(x, y, width, height))
    }
}
