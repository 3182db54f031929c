//! SVG rendering for text blocks and tables.

use svg::node::{Text as SvgText, element as svg_element};

use vellum_core::{
    geometry::Bounds,
    primitive::{Table, TextBlock},
    style::{HAlign, TextLayout, TextStyle, VAlign},
};

use super::SvgWriter;

/// Inner padding, in points, of text blocks that do not set a margin.
const DEFAULT_MARGIN_PT: f32 = 3.6;

/// Line height as a multiple of the font size.
const LINE_HEIGHT: f32 = 1.2;

/// Distance from the top of a line to its baseline, as a fraction of the line height.
const BASELINE: f32 = 0.8;

/// The styled pieces of one rendered line.
type Line<'a> = Vec<(&'a str, &'a TextStyle)>;

/// Splits runs into rendered lines.
///
/// A new line starts after every run marked with a break and at every `\n`
/// inside a run.
fn split_lines(block: &TextBlock) -> Vec<Line<'_>> {
    let mut lines = vec![Line::new()];
    for run in block.runs() {
        for (index, piece) in run.text().split('\n').enumerate() {
            if index > 0 {
                lines.push(Line::new());
            }
            if let Some(line) = lines.last_mut() {
                line.push((piece, run.style()));
            }
        }
        if run.break_after() {
            lines.push(Line::new());
        }
    }
    if lines.last().is_some_and(Vec::is_empty) && lines.len() > 1 {
        lines.pop();
    }
    lines
}

impl SvgWriter {
    pub(super) fn render_text_block(&self, block: &TextBlock) -> svg_element::Group {
        let mut group = svg_element::Group::new();
        let bounds = block.bounds();

        if let Some(fill) = block.fill() {
            group = group.add(
                svg_element::Rectangle::new()
                    .set("x", self.px(bounds.min_x()))
                    .set("y", self.px(bounds.min_y()))
                    .set("width", self.px(bounds.width()))
                    .set("height", self.px(bounds.height()))
                    .set("fill", fill.color().to_hex())
                    .set("fill-opacity", fill.opacity()),
            );
        }

        let lines = split_lines(block);
        let fallback = block.runs().first().map(|run| run.style().font_size());
        group.add(self.render_lines(bounds, &lines, block.layout(), fallback))
    }

    pub(super) fn render_table(&self, table: &Table) -> svg_element::Group {
        let mut group = svg_element::Group::new();
        let layout = TextLayout::new(HAlign::Left, VAlign::Middle);

        for (row, cells) in table.rows().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let Some(bounds) = table.cell_bounds(row, col) else {
                    continue;
                };

                let mut rect = svg_element::Rectangle::new()
                    .set("x", self.px(bounds.min_x()))
                    .set("y", self.px(bounds.min_y()))
                    .set("width", self.px(bounds.width()))
                    .set("height", self.px(bounds.height()));
                rect = match cell.fill() {
                    Some(fill) => rect
                        .set("fill", fill.color().to_hex())
                        .set("fill-opacity", fill.opacity()),
                    None => rect.set("fill", "#FFFFFF"),
                };
                self.apply_stroke(&mut rect, table.border());
                group = group.add(rect);

                let lines: Vec<Line<'_>> = cell
                    .text()
                    .split('\n')
                    .map(|piece| vec![(piece, cell.style())])
                    .collect();
                group = group.add(self.render_lines(
                    bounds,
                    &lines,
                    &layout.with_align(cell.align()),
                    Some(cell.style().font_size()),
                ));
            }
        }

        group
    }

    /// Lays out `lines` inside `bounds` as a single `<text>` element.
    ///
    /// Each line becomes a positioned `<tspan>` holding one `<tspan>` per
    /// styled piece. `fallback_size` sizes lines that have no pieces.
    fn render_lines(
        &self,
        bounds: Bounds,
        lines: &[Line<'_>],
        layout: &TextLayout,
        fallback_size: Option<f32>,
    ) -> svg_element::Text {
        let margin = self.pt(layout.margin().unwrap_or(DEFAULT_MARGIN_PT));
        let left = self.px(bounds.min_x()) + margin;
        let right = self.px(bounds.max_x()) - margin;
        let top = self.px(bounds.min_y()) + margin;
        let bottom = self.px(bounds.max_y()) - margin;

        let line_heights: Vec<f32> = lines
            .iter()
            .map(|line| {
                let size = line
                    .iter()
                    .map(|(_, style)| style.font_size())
                    .reduce(f32::max)
                    .or(fallback_size)
                    .unwrap_or_default();
                self.pt(size) * LINE_HEIGHT * layout.line_spacing()
            })
            .collect();
        let total_height: f32 = line_heights.iter().sum();

        let mut y = match layout.valign() {
            VAlign::Top => top,
            VAlign::Middle => (top + bottom - total_height) / 2.0,
            VAlign::Bottom => bottom - total_height,
        };
        let (x, anchor) = match layout.align() {
            HAlign::Left => (left, "start"),
            HAlign::Center => ((left + right) / 2.0, "middle"),
            HAlign::Right => (right, "end"),
        };

        let mut text = svg_element::Text::new("").set("text-anchor", anchor);
        for (line, height) in lines.iter().zip(&line_heights) {
            let mut line_span = svg_element::TSpan::new("")
                .set("x", x)
                .set("y", y + height * BASELINE);
            for (piece, style) in line {
                line_span = line_span.add(self.render_piece(piece, style));
            }
            text = text.add(line_span);
            y += height;
        }
        text
    }

    fn render_piece(&self, piece: &str, style: &TextStyle) -> svg_element::TSpan {
        let mut span = svg_element::TSpan::new("")
            .set("font-family", style.font_face())
            .set("font-size", self.pt(style.font_size()))
            .set("fill", style.color().to_hex());

        if style.bold() {
            span = span.set("font-weight", "bold");
        }
        if style.italic() {
            span = span.set("font-style", "italic");
        }
        if style.char_spacing() != 0.0 {
            span = span.set("letter-spacing", self.pt(style.char_spacing()));
        }

        span.add(SvgText::new(piece))
    }
}
