//! State machine and request flow slides.

use vellum_core::{
    geometry::{Bounds, Size},
    primitive::DrawPrimitive,
    style::{HAlign, TextRole},
    theme::palette,
};

use super::SlideContent;
use crate::{
    compose::ComposeError,
    content::{
        ColumnStyle, EmitContext, Emitter, Participant, SequenceDiagram, SequenceStep, StateFlow,
        StateNode, TableSpec, TextBox, TextSpec,
    },
    layout::{SequenceSpec, StateFlowSpec},
};

/// The italic introduction line under the title bar.
fn lead(text: &str, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
    TextBox::new(text, TextSpec::new(TextRole::Lead)).emit(Bounds::new(0.7, 1.3, 8.6, 0.35), ctx)
}

fn state_table() -> TableSpec {
    TableSpec::new(
        &["State", "Value", "Description"],
        vec![1.3, 0.7, 6.6],
        vec![0.3, 0.28, 0.28, 0.28, 0.28, 0.28],
    )
    .with_header_font_size(10.0)
    .with_row(&["start", "0", "Initial state, display shows 0, waiting for first input"])
    .with_row(&["operand1", "1", "User is entering the first operand"])
    .with_row(&["operator", "2", "Operator selected, waiting for second operand"])
    .with_row(&["operand2", "3", "User is entering the second operand"])
    .with_row(&["complete", "4", "Calculation complete, result displayed"])
    .with_columns(vec![
        ColumnStyle::new().face("Consolas").color(palette::CHARCOAL),
        ColumnStyle::new().color(palette::MED_GRAY).align(HAlign::Center),
        ColumnStyle::new().color(palette::CHARCOAL),
    ])
}

pub(super) fn state_machine(ctx: &EmitContext<'_>) -> Result<SlideContent, ComposeError> {
    let mut slide = SlideContent::titled("Client State Machine", ctx)?;

    slide.push(lead(
        "The calculator UI uses a finite state machine to manage input flow and transitions",
        ctx,
    )?);

    let flow = StateFlow::new(
        StateFlowSpec::even(0.5, 1.9, 2.0, 1.5, 0.9)?,
        vec![
            StateNode::new("START", "0", palette::STEEL_BLUE),
            StateNode::new("OPERAND1", "1", palette::TEAL),
            StateNode::new("OPERATOR", "2", palette::MINT),
            StateNode::new("OPERAND2", "3", palette::TEAL),
            StateNode::new("COMPLETE", "4", palette::STEEL_BLUE),
        ],
    )
    .with_transition_labels(&["Press\n1-9", "Press\n+,-,*,/", "Press\ndigit", "Press\n="]);
    slide.push(flow.emit(ctx)?);

    slide.push(state_table().emit(Bounds::new(0.7, 3.75, 8.6, 1.7), ctx)?);

    Ok(slide)
}

pub(super) fn request_flow(ctx: &EmitContext<'_>) -> Result<SlideContent, ComposeError> {
    let mut slide = SlideContent::titled("Request Flow", ctx)?;

    slide.push(lead("End-to-end flow of a calculation: 5 + 3 = 8", ctx)?);

    let spec = SequenceSpec::new(
        vec![0.6, 2.3, 4.0, 5.7, 7.0, 8.5],
        1.75,
        Size::new(1.3, 0.4),
        5.27,
    )?;
    let participants = [
        "User",
        "Calculator UI",
        "client.js",
        "Express",
        "routes.js",
        "controller.js",
    ]
    .into_iter()
    .map(Participant::new)
    .collect();
    let steps = vec![
        SequenceStep::forward(0, 1, 2.4, "Enter '5'"),
        SequenceStep::forward(1, 2, 2.7, "numberPressed('5')"),
        SequenceStep::forward(0, 1, 3.0, "Press '+'"),
        SequenceStep::forward(1, 2, 3.3, "operationPressed('+')"),
        SequenceStep::forward(0, 1, 3.6, "Press '='"),
        SequenceStep::forward(2, 3, 3.9, "GET /arithmetic?..."),
        SequenceStep::forward(3, 4, 4.15, "route()"),
        SequenceStep::forward(4, 5, 4.4, "calculate()"),
        SequenceStep::reply(5, 2, 4.7, "{ result: 8 }"),
    ];
    slide.push(SequenceDiagram::new(spec, participants, steps).emit(ctx)?);

    Ok(slide)
}
