//! Tables with a dark header row.

use log::trace;

use vellum_core::{
    geometry::Bounds,
    primitive::{DrawPrimitive, Table, TableCell},
    style::{BorderKind, HAlign, TextRole},
    theme::palette,
};

use super::{EmitContext, Emitter, TextSpec};
use crate::compose::ComposeError;

const DEFAULT_HEADER_FONT_SIZE: f32 = 11.0;
const DEFAULT_BODY_FONT_SIZE: f32 = 10.0;

/// Text style shared by every body cell of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStyle {
    spec: TextSpec,
    align: HAlign,
}

impl ColumnStyle {
    /// Plain charcoal body text, left aligned.
    pub fn new() -> Self {
        Self {
            spec: TextSpec::new(TextRole::Body).size(DEFAULT_BODY_FONT_SIZE),
            align: HAlign::Left,
        }
    }

    pub fn face(mut self, face: &'static str) -> Self {
        self.spec = self.spec.face(face);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.spec = self.spec.size(size);
        self
    }

    pub fn color(mut self, name: &str) -> Self {
        self.spec = self.spec.color(name);
        self
    }

    pub fn bold(mut self) -> Self {
        self.spec = self.spec.bold(true);
        self
    }

    pub fn align(mut self, align: HAlign) -> Self {
        self.align = align;
        self
    }
}

impl Default for ColumnStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// A table record: header, body rows and their dimensions.
///
/// The table is drawn from the top-left corner of its frame; its extent is
/// given by the column widths and row heights, not by the frame size.
///
/// # Examples
///
/// ```
/// use vellum::content::{EmitContext, Emitter, TableSpec};
/// use vellum_core::{geometry::Bounds, primitive::DrawPrimitive, theme::Theme};
///
/// let table = TableSpec::new(&["State", "Value"], vec![1.3, 0.7], vec![0.3, 0.28])
///     .with_row(&["start", "0"]);
///
/// let ctx = EmitContext::new(Theme::midnight());
/// let primitives = table.emit(Bounds::new(0.7, 3.75, 2.0, 0.58), &ctx).unwrap();
/// let DrawPrimitive::Table(table) = &primitives[0] else { unreachable!() };
/// assert_eq!(table.cell_count(), 4);
///
/// let ragged = TableSpec::new(&["State", "Value"], vec![1.3, 0.7], vec![0.3, 0.28])
///     .with_row(&["start"]);
/// assert!(ragged.emit(Bounds::new(0.7, 3.75, 2.0, 0.58), &ctx).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<f32>,
    row_heights: Vec<f32>,
    header_font_size: f32,
    columns: Vec<ColumnStyle>,
}

impl TableSpec {
    /// Creates a table with a header and no body rows.
    ///
    /// `row_heights` covers the header row followed by every body row.
    pub fn new(header: &[&str], column_widths: Vec<f32>, row_heights: Vec<f32>) -> Self {
        Self {
            header: header.iter().map(|cell| cell.to_string()).collect(),
            rows: Vec::new(),
            column_widths,
            row_heights,
            header_font_size: DEFAULT_HEADER_FONT_SIZE,
            columns: Vec::new(),
        }
    }

    pub fn with_row(mut self, row: &[&str]) -> Self {
        self.rows.push(row.iter().map(|cell| cell.to_string()).collect());
        self
    }

    pub fn with_header_font_size(mut self, size: f32) -> Self {
        self.header_font_size = size;
        self
    }

    /// Sets one style per column for the body cells.
    pub fn with_columns(mut self, columns: Vec<ColumnStyle>) -> Self {
        self.columns = columns;
        self
    }

    /// Returns the number of columns, as given by the header.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    fn validate(&self) -> Result<(), ComposeError> {
        let width = self.width();

        if let Some((index, row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != width)
        {
            return Err(ComposeError::MalformedTable(format!(
                "row {} has {} cells, header has {width}",
                index + 1,
                row.len()
            )));
        }
        if self.column_widths.len() != width {
            return Err(ComposeError::MalformedTable(format!(
                "{} column widths for {width} columns",
                self.column_widths.len()
            )));
        }
        if self.row_heights.len() != self.rows.len() + 1 {
            return Err(ComposeError::MalformedTable(format!(
                "{} row heights for a header and {} rows",
                self.row_heights.len(),
                self.rows.len()
            )));
        }
        if !self.columns.is_empty() && self.columns.len() != width {
            return Err(ComposeError::MalformedTable(format!(
                "{} column styles for {width} columns",
                self.columns.len()
            )));
        }
        Ok(())
    }
}

impl Emitter for TableSpec {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        self.validate()?;

        let header_style = TextSpec::new(TextRole::Body)
            .size(self.header_font_size)
            .color(palette::WHITE)
            .bold(true)
            .resolve(ctx)?;
        let header = self
            .header
            .iter()
            .map(|label| {
                Ok(TableCell::new(label.as_str(), header_style.clone())
                    .with_fill(ctx.styles().new_fill(palette::DARK_NAVY, 0)?))
            })
            .collect::<Result<Vec<_>, ComposeError>>()?;

        let fallback = ColumnStyle::new();
        let mut cells = Vec::with_capacity(self.rows.len() + 1);
        cells.push(header);
        for row in &self.rows {
            let body = row
                .iter()
                .enumerate()
                .map(|(col, value)| {
                    let column = self.columns.get(col).unwrap_or(&fallback);
                    Ok(TableCell::new(value.as_str(), column.spec.resolve(ctx)?)
                        .with_align(column.align))
                })
                .collect::<Result<Vec<_>, ComposeError>>()?;
            cells.push(body);
        }

        let table = Table::new(
            frame.min_point(),
            self.column_widths.clone(),
            self.row_heights.clone(),
            cells,
            ctx.styles().new_border(BorderKind::TableGrid)?,
        );
        trace!(rows = table.row_count(), cells = table.cell_count(); "Table emitted");

        Ok(vec![DrawPrimitive::Table(table)])
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use vellum_core::theme::Theme;

    use super::*;

    fn ctx() -> EmitContext<'static> {
        EmitContext::new(Theme::midnight())
    }

    fn query_parameters() -> TableSpec {
        TableSpec::new(
            &["Parameter", "Type", "Required", "Valid Values"],
            vec![1.6, 1.1, 1.1, 4.8],
            vec![0.4, 0.35, 0.35, 0.35],
        )
        .with_row(&["operation", "string", "Yes", "add, subtract, multiply, divide"])
        .with_row(&["operand1", "number", "Yes", "Any valid number"])
        .with_row(&["operand2", "number", "Yes", "Any valid number"])
        .with_columns(vec![
            ColumnStyle::new().face("Consolas"),
            ColumnStyle::new().color(palette::MED_GRAY),
            ColumnStyle::new().bold(),
            ColumnStyle::new().size(9.0).color(palette::STEEL_BLUE),
        ])
    }

    fn table_of(primitives: &[DrawPrimitive]) -> &Table {
        match primitives {
            [DrawPrimitive::Table(table)] => table,
            _ => panic!("expected a single table primitive"),
        }
    }

    #[test]
    fn test_table_has_rows_times_width_cells() {
        let primitives = query_parameters()
            .emit(Bounds::new(0.7, 2.3, 8.6, 1.45), &ctx())
            .unwrap();
        let table = table_of(&primitives);

        assert_eq!(table.row_count(), 4);
        assert_eq!(table.cell_count(), 16);
        let bounds = table.bounds();
        assert_approx_eq!(f32, bounds.width(), 8.6, epsilon = 1e-5);
        assert_approx_eq!(f32, bounds.height(), 1.45, epsilon = 1e-5);

        let header = &table.rows()[0][0];
        assert!(header.style().bold());
        assert_eq!(header.fill().unwrap().color().to_hex(), "#0F1B2D");

        let valid_values = &table.rows()[1][3];
        assert_approx_eq!(f32, valid_values.style().font_size(), 9.0);
        assert_eq!(valid_values.style().color().to_hex(), "#2D6A8F");
        assert!(valid_values.fill().is_none());
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let table = TableSpec::new(&["State", "Value", "Description"], vec![1.3, 0.7, 6.6], vec![0.3, 0.28])
            .with_row(&["start", "0"]);
        let err = table.emit(Bounds::new(0.7, 3.75, 8.6, 0.58), &ctx()).unwrap_err();
        assert!(matches!(err, ComposeError::MalformedTable(_)));
    }

    #[test]
    fn test_dimension_mismatches_are_malformed() {
        let frame = Bounds::new(0.0, 0.0, 1.0, 1.0);

        let widths = TableSpec::new(&["A", "B"], vec![1.0], vec![0.3]);
        assert!(matches!(
            widths.emit(frame, &ctx()),
            Err(ComposeError::MalformedTable(_))
        ));

        let heights = TableSpec::new(&["A"], vec![1.0], vec![0.3, 0.3]);
        assert!(matches!(
            heights.emit(frame, &ctx()),
            Err(ComposeError::MalformedTable(_))
        ));

        let styles = TableSpec::new(&["A"], vec![1.0], vec![0.3])
            .with_columns(vec![ColumnStyle::new(), ColumnStyle::new()]);
        assert!(matches!(
            styles.emit(frame, &ctx()),
            Err(ComposeError::MalformedTable(_))
        ));
    }

    #[test]
    fn test_header_only_table() {
        let primitives = TableSpec::new(&["State", "Value"], vec![1.3, 0.7], vec![0.3])
            .with_header_font_size(10.0)
            .emit(Bounds::new(0.7, 3.75, 2.0, 0.3), &ctx())
            .unwrap();
        let table = table_of(&primitives);

        assert_eq!(table.cell_count(), 2);
        assert_approx_eq!(f32, table.rows()[0][1].style().font_size(), 10.0);
    }
}
