//! Project overview and technology stack slides.

use vellum_core::{
    geometry::Bounds,
    style::{TextLayout, TextRole},
};

use super::SlideContent;
use crate::{
    compose::ComposeError,
    content::{
        EmitContext, Emitter, FeatureCard, SectionLabel, StackEntry, TextBox, TextSpec, emit_all,
    },
    layout::{GridSpec, StackSpec},
};

const DESCRIPTION: &str = "The Node.js Calculator is a web-based application providing basic \
    arithmetic operations through a clean, browser-based interface. It follows a client-server \
    architecture where the client manages user input via a state machine, and the server performs \
    calculations through a RESTful API.";

/// The feature cards, two per row.
fn feature_grid() -> Result<GridSpec, ComposeError> {
    Ok(GridSpec::new(0.7, 2.55, 4.05, 1.2, 0.2, 0.2, 2)?)
}

fn features() -> Vec<FeatureCard> {
    vec![
        FeatureCard::new(
            "Arithmetic Operations",
            "Addition, subtraction,\nmultiplication, and division",
            "+",
        ),
        FeatureCard::new(
            "Responsive Web UI",
            "Browser-based calculator\ninterface with keyboard support",
            "UI",
        ),
        FeatureCard::new(
            "RESTful API",
            "Clean API endpoint for\ncalculation operations",
            "{ }",
        ),
        FeatureCard::new(
            "Input Validation",
            "Server-side validation\nfor all operands & operations",
            "!",
        ),
    ]
}

pub(super) fn project_overview(ctx: &EmitContext<'_>) -> Result<SlideContent, ComposeError> {
    let mut slide = SlideContent::titled("Project Overview", ctx)?;

    slide.push(
        TextBox::new(DESCRIPTION, TextSpec::new(TextRole::Body))
            .with_layout(TextLayout::flush().with_line_spacing(1.3))
            .emit(Bounds::new(0.7, 1.4, 8.6, 0.9), ctx)?,
    );

    let cards = features();
    let grid = feature_grid()?;
    slide.push(emit_all(
        &cards,
        grid.cells(cards.len()).map(|cell| cell.bounds()),
        ctx,
    )?);

    Ok(slide)
}

pub(super) fn technology_stack(ctx: &EmitContext<'_>) -> Result<SlideContent, ComposeError> {
    let mut slide = SlideContent::titled("Technology Stack", ctx)?;
    let heading = TextSpec::new(TextRole::SectionLabel)
        .size(12.0)
        .char_spacing(3.0);

    let core = [
        StackEntry::new("Runtime", "Node.js", None),
        StackEntry::new("Framework", "Express.js", Some("^4.16.4")),
        StackEntry::new("Dev Server", "Nodemon", Some("^2.0.20")),
        StackEntry::new("Build Tools", "Gulp", Some("^4.0.0")),
    ];
    let tooling = [
        StackEntry::new("Testing", "Mocha + Chai", Some("^5.2.0 / ^4.2.0")),
        StackEntry::new("HTTP Testing", "Supertest", Some("^3.4.2")),
        StackEntry::new("Coverage", "NYC (Istanbul)", Some("^13.3.0")),
        StackEntry::new("Linting", "ESLint", Some("^8.29.0")),
    ];

    slide.push(
        SectionLabel::new("CORE")
            .with_spec(heading.clone())
            .emit(Bounds::new(0.7, 1.3, 2.0, 0.35), ctx)?,
    );
    slide.push(
        SectionLabel::new("DEVELOPMENT & TESTING")
            .with_spec(heading)
            .emit(Bounds::new(5.2, 1.3, 4.0, 0.35), ctx)?,
    );

    for (x, entries) in [(0.7, &core), (5.2, &tooling)] {
        let stack = StackSpec::new(x, 1.7, 4.1, 0.78, 0.95)?;
        slide.push(emit_all(entries, stack.frames(entries.len()), ctx)?);
    }

    Ok(slide)
}
