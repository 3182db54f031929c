//! Monospaced content: file trees, command walkthroughs and code panels.

use vellum_core::{
    geometry::Bounds,
    primitive::{DrawPrimitive, TextBlock, TextRun},
    style::{HAlign, TextLayout, TextRole, VAlign},
    theme::palette,
};

use super::{EmitContext, Emitter, TextSpec, filled_oval, filled_rect, text};
use crate::compose::ComposeError;

/// Indentation added per tree level.
const TREE_INDENT: &str = "  ";

/// One line of a directory listing.
///
/// Blank lines keep their row in the layout but draw nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FileTreeLine {
    name: String,
    depth: usize,
    is_dir: bool,
}

impl FileTreeLine {
    pub fn file(name: &str, depth: usize) -> Self {
        Self {
            name: name.to_string(),
            depth,
            is_dir: false,
        }
    }

    pub fn dir(name: &str, depth: usize) -> Self {
        Self {
            is_dir: true,
            ..Self::file(name, depth)
        }
    }

    pub fn blank() -> Self {
        Self::file("", 0)
    }

    /// Returns the indented text of the line.
    pub fn display_text(&self) -> String {
        format!("{}{}", TREE_INDENT.repeat(self.depth), self.name)
    }
}

impl Emitter for FileTreeLine {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        if self.name.is_empty() {
            return Ok(Vec::new());
        }

        let spec = if self.is_dir {
            TextSpec::new(TextRole::Code).color(palette::TEAL).bold(true)
        } else {
            TextSpec::new(TextRole::Code)
        };

        Ok(vec![text(
            frame,
            &self.display_text(),
            &spec,
            TextLayout::flush().with_valign(VAlign::Middle),
            ctx,
        )?])
    }
}

/// A numbered step with a title and a shell command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandStep {
    number: u32,
    title: String,
    command: String,
}

impl CommandStep {
    pub fn new(number: u32, title: &str, command: &str) -> Self {
        Self {
            number,
            title: title.to_string(),
            command: command.to_string(),
        }
    }
}

impl Emitter for CommandStep {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        let bubble = frame.inset_rect(0.0, 0.05, 0.55, 0.55);
        let width = frame.width();

        Ok(vec![
            filled_oval(bubble, palette::TEAL, 0, ctx)?,
            text(
                bubble,
                &self.number.to_string(),
                &TextSpec::new(TextRole::SlideTitle).size(18.0),
                TextLayout::centered(),
                ctx,
            )?,
            text(
                frame.inset_rect(0.7, 0.0, 3.0, 0.35),
                &self.title,
                &TextSpec::new(TextRole::CardTitle).size(16.0),
                TextLayout::flush(),
                ctx,
            )?,
            filled_rect(
                frame.inset_rect(0.7, 0.38, width - 0.7, 0.52),
                palette::DARK_NAVY,
                0,
                ctx,
            )?,
            text(
                frame.inset_rect(0.9, 0.38, width - 1.1, 0.52),
                &self.command,
                &TextSpec::new(TextRole::Code).color(palette::MINT),
                TextLayout::new(HAlign::Left, VAlign::Middle).with_margin(0.0),
                ctx,
            )?,
        ])
    }
}

/// A styled run inside a [`CodePanel`].
#[derive(Debug, Clone, PartialEq)]
pub struct CodeSpan {
    text: String,
    spec: TextSpec,
    break_after: bool,
}

impl CodeSpan {
    /// Creates a white monospaced span.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            spec: TextSpec::new(TextRole::Code),
            break_after: false,
        }
    }

    pub fn color(mut self, name: &str) -> Self {
        self.spec = self.spec.color(name);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.spec = self.spec.size(size);
        self
    }

    pub fn bold(mut self) -> Self {
        self.spec = self.spec.bold(true);
        self
    }

    pub fn face(mut self, face: &'static str) -> Self {
        self.spec = self.spec.face(face);
        self
    }

    /// Ends the line after this span.
    pub fn line_break(mut self) -> Self {
        self.break_after = true;
        self
    }
}

/// A dark panel holding monospaced runs.
#[derive(Debug, Clone, PartialEq)]
pub struct CodePanel {
    spans: Vec<CodeSpan>,
    valign: VAlign,
}

impl CodePanel {
    pub fn new(spans: Vec<CodeSpan>) -> Self {
        Self {
            spans,
            valign: VAlign::Middle,
        }
    }

    pub fn with_valign(mut self, valign: VAlign) -> Self {
        self.valign = valign;
        self
    }
}

impl Emitter for CodePanel {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        let mut primitives = vec![filled_rect(frame, palette::DARK_NAVY, 0, ctx)?];
        if self.spans.is_empty() {
            return Ok(primitives);
        }

        let mut block = TextBlock::new(
            frame.inset_rect(0.2, 0.1, frame.width() - 0.4, frame.height() - 0.2),
            TextLayout::new(HAlign::Left, self.valign).with_margin(0.0),
        );
        for span in &self.spans {
            let mut run = TextRun::new(span.text.as_str(), span.spec.resolve(ctx)?);
            if span.break_after {
                run = run.with_break();
            }
            block.push_run(run);
        }
        primitives.push(DrawPrimitive::TextBlock(block));

        Ok(primitives)
    }
}
