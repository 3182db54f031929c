//! Testing, project structure and getting started slides.

use vellum_core::{
    geometry::Bounds,
    style::{HAlign, TextRole},
    theme::palette,
};

use super::SlideContent;
use crate::{
    compose::ComposeError,
    content::{
        AccentItem, BadgeItem, Callout, CodePanel, CodeSpan, CommandStep, EmitContext, Emitter,
        FileTreeLine, SectionLabel, TextSpec, emit_all, filled_rect,
    },
    layout::StackSpec,
};

pub(super) fn testing(ctx: &EmitContext<'_>) -> Result<SlideContent, ComposeError> {
    let mut slide = SlideContent::titled("Testing & Quality", ctx)?;

    slide.push(
        SectionLabel::new("TESTING FRAMEWORK").emit(Bounds::new(0.7, 1.35, 4.0, 0.3), ctx)?,
    );
    let tools = [
        AccentItem::new("Mocha", "Test runner with BDD-style describe/it blocks"),
        AccentItem::new("Chai", "Assertion library with expect/should syntax"),
        AccentItem::new("Supertest", "HTTP endpoint testing via request simulation"),
        AccentItem::new("NYC (Istanbul)", "Code coverage with Cobertura & HTML reports"),
    ];
    let tool_stack = StackSpec::new(0.7, 1.75, 4.2, 0.58, 0.7)?;
    slide.push(emit_all(&tools, tool_stack.frames(tools.len()), ctx)?);

    slide.push(SectionLabel::new("TEST COVERAGE").emit(Bounds::new(5.3, 1.35, 4.0, 0.3), ctx)?);
    let categories = [
        BadgeItem::new("5 tests", "Validation", "Missing/invalid operations & operands"),
        BadgeItem::new(
            "6 tests",
            "Addition",
            "Integers, negatives, floats, scientific notation",
        ),
        BadgeItem::new(
            "tests",
            "Multiplication",
            "Positive, negative, float multiplication",
        ),
        BadgeItem::new("tests", "Division", "Standard and edge case division"),
    ];
    let category_stack = StackSpec::new(5.3, 1.75, 4.0, 0.58, 0.7)?;
    slide.push(emit_all(
        &categories,
        category_stack.frames(categories.len()),
        ctx,
    )?);

    slide.push(
        CodePanel::new(vec![
            CodeSpan::new("$  ").size(13.0).color(palette::MINT),
            CodeSpan::new("npm test").size(13.0).bold(),
            CodeSpan::new("   # Runs Mocha + NYC coverage + generates HTML & Cobertura reports")
                .color(palette::SUBTLE_GRAY),
        ])
        .emit(Bounds::new(0.7, 4.7, 8.6, 0.55), ctx)?,
    );

    Ok(slide)
}

fn file_tree() -> Vec<FileTreeLine> {
    vec![
        FileTreeLine::dir("copilot-node-calculator/", 0),
        FileTreeLine::file("server.js", 1),
        FileTreeLine::file("package.json", 1),
        FileTreeLine::file("gulpfile.js", 1),
        FileTreeLine::file("documentation.md", 1),
        FileTreeLine::blank(),
        FileTreeLine::dir("api/", 1),
        FileTreeLine::file("controller.js", 2),
        FileTreeLine::file("routes.js", 2),
        FileTreeLine::blank(),
        FileTreeLine::dir("public/", 1),
        FileTreeLine::file("index.html", 2),
        FileTreeLine::file("client.js", 2),
        FileTreeLine::file("default.css", 2),
        FileTreeLine::blank(),
        FileTreeLine::dir("test/", 1),
        FileTreeLine::file("arithmetic.test.js", 2),
        FileTreeLine::file("helpers.js", 2),
    ]
}

pub(super) fn project_structure(ctx: &EmitContext<'_>) -> Result<SlideContent, ComposeError> {
    let mut slide = SlideContent::titled("Project Structure", ctx)?;

    slide.push(vec![filled_rect(
        Bounds::new(0.5, 1.35, 4.3, 3.9),
        palette::DARK_NAVY,
        0,
        ctx,
    )?]);
    let tree = file_tree();
    let tree_stack = StackSpec::new(0.7, 1.5, 3.9, 0.2, 0.2)?;
    slide.push(emit_all(&tree, tree_stack.frames(tree.len()), ctx)?);

    slide.push(SectionLabel::new("KEY FILES").emit(Bounds::new(5.3, 1.35, 4.0, 0.3), ctx)?);
    let key_files = [
        (
            "server.js",
            "Express server entry point, serves\nstatic files and mounts API routes",
        ),
        ("api/controller.js", "Core calculation logic and\ninput validation"),
        ("api/routes.js", "Defines /arithmetic endpoint\nrouting"),
        (
            "public/client.js",
            "Client-side state machine and\nAPI communication",
        ),
        (
            "public/index.html",
            "Calculator user interface\nwith button grid",
        ),
    ]
    .map(|(file, description)| {
        AccentItem::new(file, description)
            .with_accent(palette::STEEL_BLUE)
            .monospace()
    });
    let key_stack = StackSpec::new(5.3, 1.75, 4.2, 0.62, 0.72)?;
    slide.push(emit_all(&key_files, key_stack.frames(key_files.len()), ctx)?);

    Ok(slide)
}

pub(super) fn getting_started(ctx: &EmitContext<'_>) -> Result<SlideContent, ComposeError> {
    let mut slide = SlideContent::titled("Getting Started", ctx)?;

    let steps = [
        CommandStep::new(
            1,
            "Clone & Install",
            "git clone <repo-url>\ncd node-calculator\nnpm install",
        ),
        CommandStep::new(
            2,
            "Run Development Server",
            "npm start\n# Starts Nodemon on port 3000",
        ),
        CommandStep::new(3, "Run Tests", "npm test\n# Mocha + NYC coverage reports"),
        CommandStep::new(4, "Lint Code", "npm run lint\n# ESLint check"),
    ];
    let step_stack = StackSpec::new(0.7, 1.4, 8.6, 0.9, 1.0)?;
    slide.push(emit_all(&steps, step_stack.frames(steps.len()), ctx)?);

    slide.push(
        Callout::new(
            "Environment: Set PORT to customize server port (default: 3000)",
            palette::TEAL,
            85,
        )
        .with_spec(
            TextSpec::new(TextRole::Body)
                .size(11.0)
                .color(palette::STEEL_BLUE),
        )
        .with_align(HAlign::Left)
        .emit(Bounds::new(0.7, 5.0, 8.6, 0.35), ctx)?,
    );

    Ok(slide)
}
