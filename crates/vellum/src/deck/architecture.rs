//! Architecture and API design slides.

use vellum_core::{
    geometry::{Bounds, Segment},
    primitive::DrawPrimitive,
    style::{BorderKind, HAlign, TextLayout, TextRole, VAlign},
    theme::palette,
};

use super::SlideContent;
use crate::{
    compose::ComposeError,
    content::{
        Callout, CodePanel, CodeSpan, ColumnStyle, ComponentBox, EmitContext, Emitter,
        LayerFrame, SectionLabel, TableSpec, TextBox, TextSpec, emit_all, line,
    },
    layout::StackSpec,
};

pub(super) fn application_architecture(
    ctx: &EmitContext<'_>,
) -> Result<SlideContent, ComposeError> {
    let mut slide = SlideContent::titled("Application Architecture", ctx)?;

    // Client layer
    slide.push(
        LayerFrame::new("CLIENT LAYER", palette::TEAL, 92)
            .with_caption("Browser")
            .emit(Bounds::new(0.5, 1.45, 2.8, 3.7), ctx)?,
    );
    let client = [
        ComponentBox::new("index.html", Some("Calculator UI")),
        ComponentBox::new("client.js", Some("State Machine")),
        ComponentBox::new("default.css", Some("Styles")),
    ];
    let client_stack = StackSpec::new(0.85, 2.15, 2.1, 0.7, 0.85)?;
    slide.push(emit_all(&client, client_stack.frames(client.len()), ctx)?);

    slide.push(vec![line(
        Segment::horizontal(3.3, 4.1, 3.1),
        BorderKind::Flow,
        ctx,
    )?]);
    slide.push(
        TextBox::new(
            "HTTP GET\n/arithmetic",
            TextSpec::new(TextRole::Code)
                .size(7.0)
                .color(palette::STEEL_BLUE),
        )
        .with_layout(TextLayout::centered())
        .emit(Bounds::new(3.25, 2.45, 0.9, 0.55), ctx)?,
    );

    // Server layer
    slide.push(
        LayerFrame::new("SERVER LAYER", palette::STEEL_BLUE, 92)
            .with_caption("Node.js + Express")
            .emit(Bounds::new(4.1, 1.45, 5.4, 3.7), ctx)?,
    );
    slide.push(
        ComponentBox::new("server.js", Some("Express Server"))
            .emit(Bounds::new(4.45, 2.15, 2.2, 0.7), ctx)?,
    );
    slide.push(
        ComponentBox::new("Static File Middleware", None)
            .emit(Bounds::new(4.45, 3.1, 2.2, 0.55), ctx)?,
    );

    slide.push(
        LayerFrame::new("API LAYER", palette::DARK_NAVY, 94)
            .nested()
            .emit(Bounds::new(7.0, 2.15, 2.2, 2.7), ctx)?,
    );
    let api = [
        ComponentBox::new("routes.js", Some("Route Definitions")).compact(),
        ComponentBox::new("controller.js", Some("Business Logic")).compact(),
    ];
    let api_stack = StackSpec::new(7.2, 2.6, 1.8, 0.65, 0.9)?;
    slide.push(emit_all(&api, api_stack.frames(api.len()), ctx)?);

    slide.push(vec![
        line(Segment::horizontal(6.65, 7.0, 2.5), BorderKind::Connector, ctx)?,
        line(Segment::vertical(5.55, 2.85, 3.1), BorderKind::Connector, ctx)?,
        line(Segment::vertical(8.1, 3.25, 3.5), BorderKind::Connector, ctx)?,
    ]);
    slide.push(
        Callout::new("{ result: number }", palette::MINT, 70)
            .with_spec(
                TextSpec::new(TextRole::Code)
                    .size(9.0)
                    .color(palette::STEEL_BLUE),
            )
            .emit(Bounds::new(7.2, 4.35, 1.8, 0.35), ctx)?,
    );

    Ok(slide)
}

fn query_parameters() -> TableSpec {
    TableSpec::new(
        &["Parameter", "Type", "Required", "Valid Values"],
        vec![1.6, 1.1, 1.1, 4.8],
        vec![0.4, 0.35, 0.35, 0.35],
    )
    .with_row(&["operation", "string", "Yes", "add, subtract, multiply, divide"])
    .with_row(&["operand1", "number", "Yes", "Any valid number (decimals, scientific)"])
    .with_row(&["operand2", "number", "Yes", "Any valid number (decimals, scientific)"])
    .with_columns(vec![
        ColumnStyle::new().face("Consolas").color(palette::CHARCOAL),
        ColumnStyle::new().color(palette::MED_GRAY),
        ColumnStyle::new().color(palette::CHARCOAL).bold(),
        ColumnStyle::new().size(9.0).color(palette::STEEL_BLUE),
    ])
}

/// A response heading over a dark payload panel.
fn response(
    heading: &str,
    color: &str,
    status: &str,
    body: CodeSpan,
    x: f32,
    ctx: &EmitContext<'_>,
) -> Result<Vec<DrawPrimitive>, ComposeError> {
    let mut primitives = SectionLabel::new(heading)
        .with_spec(TextSpec::new(TextRole::SectionLabel).color(color))
        .emit(Bounds::new(x, 3.85, 4.0, 0.3), ctx)?;
    primitives.extend(
        CodePanel::new(vec![
            CodeSpan::new(status)
                .face("Calibri")
                .size(9.0)
                .color(color)
                .bold()
                .line_break(),
            body,
        ])
        .emit(Bounds::new(x, 4.2, 4.0, 1.1), ctx)?,
    );
    Ok(primitives)
}

pub(super) fn api_design(ctx: &EmitContext<'_>) -> Result<SlideContent, ComposeError> {
    let mut slide = SlideContent::titled("API Design", ctx)?;

    slide.push(
        Callout::new("GET", palette::MINT, 50)
            .with_spec(
                TextSpec::new(TextRole::Code)
                    .size(14.0)
                    .color(palette::DARK_NAVY)
                    .bold(true),
            )
            .emit(Bounds::new(0.7, 1.35, 1.0, 0.38), ctx)?,
    );
    slide.push(
        TextBox::new(
            "/arithmetic",
            TextSpec::new(TextRole::Code)
                .size(16.0)
                .color(palette::DARK_NAVY),
        )
        .with_layout(TextLayout::new(HAlign::Left, VAlign::Middle))
        .emit(Bounds::new(1.8, 1.35, 3.0, 0.38), ctx)?,
    );

    slide.push(
        SectionLabel::new("QUERY PARAMETERS").emit(Bounds::new(0.7, 1.95, 4.0, 0.3), ctx)?,
    );
    slide.push(query_parameters().emit(Bounds::new(0.7, 2.3, 8.6, 1.45), ctx)?);

    slide.push(response(
        "SUCCESS RESPONSE",
        palette::MINT,
        "200 OK",
        CodeSpan::new("{ \"result\": 8 }").size(14.0),
        0.7,
        ctx,
    )?);
    slide.push(response(
        "ERROR RESPONSE",
        palette::ERROR_RED,
        "400 Bad Request",
        CodeSpan::new("{ \"error\": \"Invalid operation\" }").size(12.0),
        5.3,
        ctx,
    )?);

    Ok(slide)
}
