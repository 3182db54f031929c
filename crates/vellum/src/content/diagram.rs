//! State machines and sequence diagrams.
//!
//! The node and participant records are plain emitters. The composites,
//! [`StateFlow`] and [`SequenceDiagram`], own a layout spec and place their
//! records, arrows and lifelines through it.

use log::trace;

use vellum_core::{
    geometry::Bounds,
    primitive::{DrawPrimitive, ShapePrimitive},
    style::{BorderKind, HAlign, ShadowKind, TextLayout, TextRole, VAlign},
    theme::palette,
};

use super::{EmitContext, Emitter, TextSpec, line, text};
use crate::{
    compose::ComposeError,
    layout::{SequenceSpec, StateFlowSpec},
};

/// One state of a state machine, drawn as a colored oval.
#[derive(Debug, Clone, PartialEq)]
pub struct StateNode {
    name: String,
    value: String,
    color: String,
}

impl StateNode {
    pub fn new(name: &str, value: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            color: color.to_string(),
        }
    }
}

impl Emitter for StateNode {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        let oval = ShapePrimitive::new(frame)
            .with_fill(ctx.styles().new_fill(&self.color, 0)?)
            .with_shadow(ctx.styles().new_shadow(ShadowKind::Card));
        let top_aligned = TextLayout::new(HAlign::Center, VAlign::Top).with_margin(0.0);
        let width = frame.width();

        Ok(vec![
            DrawPrimitive::Oval(oval),
            text(
                frame.inset_rect(0.0, 0.12, width, 0.38),
                &self.name,
                &TextSpec::new(TextRole::SlideTitle).size(11.0),
                top_aligned,
                ctx,
            )?,
            text(
                frame.inset_rect(0.0, 0.48, width, 0.28),
                &self.value,
                &TextSpec::new(TextRole::Code).size(9.0),
                top_aligned,
                ctx,
            )?,
        ])
    }
}

/// A row of state nodes joined by labelled transition arrows.
#[derive(Debug, Clone, PartialEq)]
pub struct StateFlow {
    spec: StateFlowSpec,
    nodes: Vec<StateNode>,
    transition_labels: Vec<String>,
}

impl StateFlow {
    pub fn new(spec: StateFlowSpec, nodes: Vec<StateNode>) -> Self {
        Self {
            spec,
            nodes,
            transition_labels: Vec::new(),
        }
    }

    /// Sets the labels drawn under the transitions, in order.
    ///
    /// Labels beyond the last transition are ignored.
    pub fn with_transition_labels(mut self, labels: &[&str]) -> Self {
        self.transition_labels = labels.iter().map(|label| label.to_string()).collect();
        self
    }

    /// Emits nodes, then transition arrows, then their labels.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::Layout`] if the spec has fewer positions than
    /// there are nodes, and [`ComposeError`] if a node color is not in the
    /// theme.
    pub fn emit(&self, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        let frames = self.spec.nodes(self.nodes.len())?;
        let mut primitives = super::emit_all(&self.nodes, frames.iter().copied(), ctx)?;

        let transitions = self.spec.transitions(frames.len())?;
        for segment in &transitions {
            primitives.push(line(*segment, BorderKind::Transition, ctx)?);
        }

        let label_spec = TextSpec::new(TextRole::Caption).size(8.0);
        for (index, label) in self.transition_labels.iter().take(transitions.len()).enumerate() {
            if let Some(frame) = self.spec.label_bounds(index) {
                primitives.push(text(
                    frame,
                    label,
                    &label_spec,
                    TextLayout::new(HAlign::Center, VAlign::Top).with_margin(0.0),
                    ctx,
                )?);
            }
        }

        trace!(
            nodes = frames.len(),
            transitions = transitions.len(),
            primitive_count = primitives.len();
            "State flow emitted"
        );
        Ok(primitives)
    }
}

/// A participant box at the top of a sequence diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    name: String,
}

impl Participant {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Emitter for Participant {
    fn emit(&self, frame: Bounds, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        let shape = ShapePrimitive::new(frame)
            .with_fill(ctx.styles().new_fill(palette::STEEL_BLUE, 0)?)
            .with_shadow(ctx.styles().new_shadow(ShadowKind::Card));

        Ok(vec![
            DrawPrimitive::Rectangle(shape),
            text(
                frame,
                &self.name,
                &TextSpec::new(TextRole::SlideTitle).size(9.0),
                TextLayout::centered(),
                ctx,
            )?,
        ])
    }
}

/// Whether a message is a request or its reply.
///
/// The direction only selects the style of the arrow and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageDirection {
    #[default]
    Forward,
    Return,
}

/// A labelled message between two participants.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceStep {
    from: usize,
    to: usize,
    y: f32,
    label: String,
    direction: MessageDirection,
}

impl SequenceStep {
    pub fn new(from: usize, to: usize, y: f32, label: &str, direction: MessageDirection) -> Self {
        Self {
            from,
            to,
            y,
            label: label.to_string(),
            direction,
        }
    }

    pub fn forward(from: usize, to: usize, y: f32, label: &str) -> Self {
        Self::new(from, to, y, label, MessageDirection::Forward)
    }

    pub fn reply(from: usize, to: usize, y: f32, label: &str) -> Self {
        Self::new(from, to, y, label, MessageDirection::Return)
    }

    pub fn direction(&self) -> MessageDirection {
        self.direction
    }

    /// Emits the message line and its label.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::Layout`] if either end is not a participant of
    /// `spec`.
    pub fn emit_on(
        &self,
        spec: &SequenceSpec,
        ctx: &EmitContext<'_>,
    ) -> Result<Vec<DrawPrimitive>, ComposeError> {
        let segment = spec.message(self.from, self.to, self.y)?;
        let label_frame = spec.label_bounds(self.from, self.to, self.y)?;

        let (kind, label_color) = match self.direction {
            MessageDirection::Forward => (BorderKind::Message, palette::CHARCOAL),
            MessageDirection::Return => (BorderKind::ReturnMessage, palette::STEEL_BLUE),
        };

        Ok(vec![
            line(segment, kind, ctx)?,
            text(
                label_frame,
                &self.label,
                &TextSpec::new(TextRole::Code).size(7.0).color(label_color),
                TextLayout::flush(),
                ctx,
            )?,
        ])
    }
}

/// Participants with lifelines and the messages passed between them.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceDiagram {
    spec: SequenceSpec,
    participants: Vec<Participant>,
    steps: Vec<SequenceStep>,
}

impl SequenceDiagram {
    pub fn new(spec: SequenceSpec, participants: Vec<Participant>, steps: Vec<SequenceStep>) -> Self {
        Self {
            spec,
            participants,
            steps,
        }
    }

    /// Emits participant boxes, then lifelines, then messages.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::Layout`] if there are more participants than
    /// positions or a step references an unknown participant.
    pub fn emit(&self, ctx: &EmitContext<'_>) -> Result<Vec<DrawPrimitive>, ComposeError> {
        let mut primitives = Vec::new();

        for (index, participant) in self.participants.iter().enumerate() {
            let frame = self.spec.participant_bounds(index)?;
            primitives.extend(participant.emit(frame, ctx)?);
        }
        for index in 0..self.participants.len() {
            primitives.push(line(self.spec.lifeline(index)?, BorderKind::Lifeline, ctx)?);
        }
        for step in &self.steps {
            primitives.extend(step.emit_on(&self.spec, ctx)?);
        }

        trace!(
            participants = self.participants.len(),
            steps = self.steps.len(),
            primitive_count = primitives.len();
            "Sequence diagram emitted"
        );
        Ok(primitives)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use vellum_core::{geometry::Size, theme::Theme};

    use super::*;
    use crate::layout::LayoutError;

    fn ctx() -> EmitContext<'static> {
        EmitContext::new(Theme::midnight())
    }

    fn spec() -> SequenceSpec {
        SequenceSpec::new(vec![0.6, 2.3, 4.0], 1.75, Size::new(1.3, 0.4), 5.27).unwrap()
    }

    fn line_of(primitive: &DrawPrimitive) -> &vellum_core::primitive::LinePrimitive {
        match primitive {
            DrawPrimitive::Line(line) => line,
            other => panic!("expected a line, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_forward_and_reply_share_geometry() {
        let request = SequenceStep::forward(0, 2, 2.5, "POST /arithmetic");
        let reply = SequenceStep::reply(2, 0, 2.5, "200 { result }");

        let forward = request.emit_on(&spec(), &ctx()).unwrap();
        let backward = reply.emit_on(&spec(), &ctx()).unwrap();

        assert_eq!(forward.len(), 2);
        assert_eq!(forward[0].bounds(), backward[0].bounds());
        assert_eq!(forward[1].bounds(), backward[1].bounds());

        let forward_stroke = line_of(&forward[0]).stroke();
        let reply_stroke = line_of(&backward[0]).stroke();
        assert!(!forward_stroke.style().is_dashed());
        assert!(reply_stroke.style().is_dashed());
        assert_ne!(forward_stroke.color(), reply_stroke.color());
    }

    #[test]
    fn test_step_to_unknown_participant_fails() {
        let step = SequenceStep::forward(0, 7, 2.5, "lost");
        let err = step.emit_on(&spec(), &ctx()).unwrap_err();
        assert_eq!(
            err,
            ComposeError::Layout(LayoutError::UnknownParticipant { index: 7, count: 3 })
        );
    }

    #[test]
    fn test_sequence_diagram_primitive_order() {
        let diagram = SequenceDiagram::new(
            spec(),
            vec![
                Participant::new("User"),
                Participant::new("Browser"),
                Participant::new("Express"),
            ],
            vec![
                SequenceStep::forward(0, 1, 2.5, "click"),
                SequenceStep::reply(2, 1, 3.0, "result"),
            ],
        );
        let primitives = diagram.emit(&ctx()).unwrap();

        // 3 × (box + name) + 3 lifelines + 2 × (line + label)
        assert_eq!(primitives.len(), 13);
        let lifeline = line_of(&primitives[6]);
        assert_approx_eq!(f32, lifeline.segment().origin().x(), 1.25, epsilon = 1e-5);
        assert_approx_eq!(f32, lifeline.segment().origin().y(), 2.15, epsilon = 1e-5);
        assert_approx_eq!(f32, lifeline.segment().end().y(), 5.27, epsilon = 1e-5);
    }

    #[test]
    fn test_state_flow_arrows_and_labels() {
        let flow = StateFlow::new(
            StateFlowSpec::even(0.5, 1.9, 2.0, 1.5, 0.9).unwrap(),
            vec![
                StateNode::new("Input", "firstOperand", palette::STEEL_BLUE),
                StateNode::new("Operator", "operation", palette::TEAL),
                StateNode::new("Result", "display", palette::MINT),
            ],
        )
        .with_transition_labels(&["Press\n1-9", "Press\n+ - x /", "unused", "extra"]);

        let primitives = flow.emit(&ctx()).unwrap();

        // 3 × 3 node primitives + 2 arrows + 2 labels
        assert_eq!(primitives.len(), 13);
        let arrow = line_of(&primitives[9]);
        assert_approx_eq!(f32, arrow.segment().origin().x(), 2.0, epsilon = 1e-5);
        assert_approx_eq!(f32, arrow.segment().dx(), 0.4, epsilon = 1e-5);
        assert_approx_eq!(f32, arrow.segment().origin().y(), 2.45, epsilon = 1e-5);
        assert_approx_eq!(f32, primitives[11].bounds().min_x(), 1.7, epsilon = 1e-5);
        assert_approx_eq!(f32, primitives[11].bounds().min_y(), 3.1, epsilon = 1e-5);
    }

    #[test]
    fn test_single_state_has_no_transitions() {
        let flow = StateFlow::new(
            StateFlowSpec::even(0.5, 1.9, 2.0, 1.5, 0.9).unwrap(),
            vec![StateNode::new("Idle", "0", palette::TEAL)],
        )
        .with_transition_labels(&["never drawn"]);

        assert_eq!(flow.emit(&ctx()).unwrap().len(), 3);
    }

    #[test]
    fn test_state_flow_with_too_few_positions_fails() {
        let flow = StateFlow::new(
            StateFlowSpec::explicit(vec![0.5, 2.4], 2.0, 1.5, 0.9).unwrap(),
            vec![
                StateNode::new("A", "0", palette::STEEL_BLUE),
                StateNode::new("B", "1", palette::TEAL),
                StateNode::new("C", "2", palette::MINT),
            ],
        );

        assert_eq!(
            flow.emit(&ctx()).unwrap_err(),
            ComposeError::Layout(LayoutError::InsufficientPositions {
                count: 3,
                capacity: 2
            })
        );
    }

    #[test]
    fn test_transition_labels_use_caption_style() {
        let flow = StateFlow::new(
            StateFlowSpec::even(0.5, 1.9, 2.0, 1.5, 0.9).unwrap(),
            vec![
                StateNode::new("START", "0", palette::STEEL_BLUE),
                StateNode::new("OPERAND1", "1", palette::TEAL),
            ],
        )
        .with_transition_labels(&["Press\n1-9"]);

        let primitives = flow.emit(&ctx()).unwrap();
        let DrawPrimitive::TextBlock(label) = &primitives[7] else {
            panic!("expected a label, got {}", primitives[7].kind_name());
        };
        let style = label.runs()[0].style();
        assert_eq!(style.font_face(), "Calibri");
        assert_approx_eq!(f32, style.font_size(), 8.0);
        assert_eq!(style.color(), ctx().theme().resolve(palette::MED_GRAY).unwrap());
    }
}
