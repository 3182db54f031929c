//! SVG export.
//!
//! [`SvgWriter`] renders every slide of a document into its own SVG file,
//! named `{prefix}-NN.svg` with a 1-based, zero-padded slide number. Canvas
//! units are scaled by a configurable number of pixels per unit; stroke
//! widths, font sizes and shadow parameters are given in points and scaled
//! at 72 points per unit.

mod shape;
mod text;

use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use log::{debug, error, info};
use svg::node::element as svg_element;

use vellum_core::primitive::DrawPrimitive;

use crate::{
    compose::{Document, Slide},
    export::{self, DocumentWriter, WriteReport},
    layout::Canvas,
};

/// Default scale, matching CSS pixels per inch.
pub const DEFAULT_PIXELS_PER_UNIT: f32 = 96.0;

/// Default file name prefix.
pub const DEFAULT_FILE_PREFIX: &str = "slide";

const POINTS_PER_UNIT: f32 = 72.0;

/// Writes one SVG file per slide.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use vellum::export::{DocumentWriter, svg::SvgWriter};
/// # fn run(document: &vellum::compose::Document) -> Result<(), vellum::export::Error> {
/// let mut writer = SvgWriter::new().with_pixels_per_unit(72.0);
/// let report = writer.write(document, Path::new("out"))?;
/// println!("{} files", report.files().len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SvgWriter {
    pixels_per_unit: f32,
    file_prefix: String,
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgWriter {
    pub fn new() -> Self {
        Self {
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }

    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f32) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    pub fn with_file_prefix(mut self, prefix: &str) -> Self {
        self.file_prefix = prefix.to_string();
        self
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    /// Returns the file name used for the slide at `index` (0-based).
    pub fn file_name(&self, index: usize) -> String {
        format!("{}-{:02}.svg", self.file_prefix, index + 1)
    }

    /// Converts canvas units to pixels.
    fn px(&self, units: f32) -> f32 {
        units * self.pixels_per_unit
    }

    /// Converts points to pixels.
    fn pt(&self, points: f32) -> f32 {
        points * self.pixels_per_unit / POINTS_PER_UNIT
    }

    /// Renders a single slide on `canvas` to an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the scale is not a positive
    /// number or any primitive has non-finite coordinates or a negative size.
    pub fn render_slide(&self, slide: &Slide, canvas: Canvas) -> Result<svg::Document, export::Error> {
        if !(self.pixels_per_unit.is_finite() && self.pixels_per_unit > 0.0) {
            return Err(export::Error::Render(format!(
                "pixels per unit must be a positive number, got {}",
                self.pixels_per_unit
            )));
        }
        if let Some((index, primitive)) = slide
            .primitives()
            .iter()
            .enumerate()
            .find(|(_, primitive)| !primitive.is_well_formed())
        {
            return Err(export::Error::Render(format!(
                "slide {} {} #{index} has invalid geometry {:?}",
                slide.id(),
                primitive.kind_name(),
                primitive.bounds()
            )));
        }

        let width = self.px(canvas.width());
        let height = self.px(canvas.height());

        let mut doc = svg::Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        doc = doc.add(
            svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", slide.background().to_hex()),
        );

        let mut defs = svg_element::Definitions::new();
        let mut has_defs = false;
        let mut body = svg_element::Group::new();

        for (index, primitive) in slide.primitives().iter().enumerate() {
            match primitive {
                DrawPrimitive::Rectangle(shape) | DrawPrimitive::Oval(shape) => {
                    let filter_id = match shape.shadow() {
                        Some(shadow) => {
                            let id = format!("shadow-{index}");
                            defs = defs.add(self.shadow_filter(&id, shadow));
                            has_defs = true;
                            Some(id)
                        }
                        None => None,
                    };
                    let oval = matches!(primitive, DrawPrimitive::Oval(_));
                    body = body.add(self.render_shape(shape, oval, filter_id.as_deref()));
                }
                DrawPrimitive::Line(line) => body = body.add(self.render_line(line)),
                DrawPrimitive::TextBlock(block) => body = body.add(self.render_text_block(block)),
                DrawPrimitive::Table(table) => body = body.add(self.render_table(table)),
            }
        }

        if has_defs {
            doc = doc.add(defs);
        }
        Ok(doc.add(body))
    }

    /// Writes an SVG document to `path` and returns the number of bytes written.
    fn write_document(&self, doc: &svg::Document, path: &Path) -> Result<u64, export::Error> {
        let content = doc.to_string();

        let mut f = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name:? = path, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = f.write_all(content.as_bytes()) {
            error!(file_name:? = path, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(content.len() as u64)
    }
}

impl DocumentWriter for SvgWriter {
    fn write(&mut self, document: &Document, destination: &Path) -> Result<WriteReport, export::Error> {
        info!(
            destination:? = destination,
            slide_count = document.len();
            "Writing document as SVG"
        );

        let canvas = document.metadata().canvas();
        // Render everything before touching the file system.
        let rendered = document
            .slides()
            .iter()
            .map(|slide| self.render_slide(slide, canvas))
            .collect::<Result<Vec<_>, _>>()?;

        if let Err(err) = fs::create_dir_all(destination) {
            error!(destination:? = destination, err:err; "Failed to create output directory");
            return Err(export::Error::Io(err));
        }

        let mut files = Vec::with_capacity(rendered.len());
        let mut bytes_written = 0;
        for (index, doc) in rendered.iter().enumerate() {
            let path = destination.join(self.file_name(index));
            let bytes = self.write_document(doc, &path)?;
            debug!(file_name:? = path, bytes; "SVG file written");
            bytes_written += bytes;
            files.push(path);
        }

        info!(files = files.len(), bytes_written; "Document written");
        Ok(WriteReport::new(destination.to_path_buf(), bytes_written, files))
    }
}

#[cfg(test)]
mod tests {
    use vellum_core::{
        geometry::{Bounds, Segment},
        primitive::{LinePrimitive, ShapePrimitive},
        style::{BorderKind, ShadowKind, StyleFactory, TextLayout, TextRole},
        theme::{Theme, palette},
    };

    use super::*;
    use crate::compose::{DocumentAssembler, DocumentMetadata, SlideComposer};

    fn sample_slide(primitives: Vec<DrawPrimitive>) -> Slide {
        let mut composer = SlideComposer::new(Theme::midnight());
        composer.draw_body(primitives).unwrap();
        composer.finalize().unwrap();
        composer.into_slide()
    }

    fn sample_primitives() -> Vec<DrawPrimitive> {
        let styles = StyleFactory::new(Theme::midnight());
        let card = ShapePrimitive::new(Bounds::new(0.7, 2.55, 4.05, 1.2))
            .with_fill(styles.new_fill(palette::WHITE, 0).unwrap())
            .with_shadow(styles.new_shadow(ShadowKind::Card));
        let lifeline = LinePrimitive::new(
            Segment::vertical(1.25, 2.15, 5.27),
            styles.new_border(BorderKind::Lifeline).unwrap(),
        );
        let title = vellum_core::primitive::TextBlock::single(
            Bounds::new(1.75, 2.67, 2.8, 0.35),
            "Fast & <Simple>",
            styles.new_text(TextRole::CardTitle).unwrap(),
            TextLayout::flush(),
        );
        vec![
            DrawPrimitive::Rectangle(card),
            DrawPrimitive::Line(lifeline),
            DrawPrimitive::TextBlock(title),
        ]
    }

    #[test]
    fn test_file_names_are_numbered_from_one() {
        let writer = SvgWriter::new().with_file_prefix("deck");
        assert_eq!(writer.file_name(0), "deck-01.svg");
        assert_eq!(writer.file_name(10), "deck-11.svg");
    }

    #[test]
    fn test_render_slide_scales_canvas() {
        let writer = SvgWriter::new();
        let doc = writer
            .render_slide(&sample_slide(sample_primitives()), Canvas::STANDARD)
            .unwrap();
        let content = doc.to_string();

        assert!(content.contains("width=\"960\""));
        assert!(content.contains("feDropShadow"));
        assert!(content.contains("filter=\"url(#shadow-0)\""));
        assert!(content.contains("stroke-dasharray"));
        assert!(content.contains("&amp;"));
        assert!(!content.contains("<Simple>"));
    }

    #[test]
    fn test_render_rejects_invalid_geometry() {
        let broken = DrawPrimitive::Rectangle(ShapePrimitive::new(Bounds::new(
            f32::NAN,
            0.0,
            1.0,
            1.0,
        )));
        let result = SvgWriter::new().render_slide(&sample_slide(vec![broken]), Canvas::STANDARD);
        assert!(matches!(result, Err(export::Error::Render(_))));

        let negative = DrawPrimitive::Rectangle(ShapePrimitive::new(Bounds::new(0.0, 0.0, -1.0, 1.0)));
        let result = SvgWriter::new().render_slide(&sample_slide(vec![negative]), Canvas::STANDARD);
        assert!(matches!(result, Err(export::Error::Render(_))));
    }

    #[test]
    fn test_render_rejects_non_positive_scale() {
        let writer = SvgWriter::new().with_pixels_per_unit(0.0);
        let result = writer.render_slide(&sample_slide(Vec::new()), Canvas::STANDARD);
        assert!(matches!(result, Err(export::Error::Render(_))));
    }

    #[test]
    fn test_write_creates_one_file_per_slide() {
        let mut assembler = DocumentAssembler::new(DocumentMetadata::new("Vellum", "SVG test"));
        assembler.append(sample_slide(sample_primitives())).unwrap();
        assembler.append(sample_slide(Vec::new())).unwrap();
        let document = assembler.seal().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("slides");
        let report = SvgWriter::new().write(&document, &destination).unwrap();

        assert_eq!(report.location(), destination.as_path());
        assert_eq!(report.files().len(), 2);
        assert!(report.files()[0].ends_with("slide-01.svg"));

        let on_disk: u64 = report
            .files()
            .iter()
            .map(|path| fs::metadata(path).unwrap().len())
            .sum();
        assert_eq!(report.bytes_written(), on_disk);
    }
}
