//! Layout calculators.
//!
//! Every calculator in this module is a pure function of its spec and an
//! index: nothing here reads or writes slides, styles or the theme. The specs
//! are validated once at construction so that the position functions
//! themselves cannot fail, except for sequence steps that name a participant
//! the layout does not know.
//!
//! - [`GridSpec`] - Row/column placement of equally sized cells
//! - [`StackSpec`] - A single column of equally spaced items
//! - [`StateFlowSpec`] - Horizontally chained state nodes with transitions
//! - [`SequenceSpec`] - Participants, lifelines and messages
//! - [`Canvas`] - The fixed slide canvas and its bounds check

mod canvas;
mod grid;
mod sequence;
mod stack;
mod state_flow;

pub use canvas::{Canvas, LayoutDefect};
pub use grid::{GridCell, GridSpec};
pub use sequence::SequenceSpec;
pub use stack::StackSpec;
pub use state_flow::StateFlowSpec;

use thiserror::Error;

/// Errors raised by layout specs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A spec was constructed with non-positive sizes, negative gaps, a
    /// pitch shorter than its items, or zero columns.
    #[error("invalid layout grid: {0}")]
    InvalidGrid(String),

    /// More items were laid out than a bounded spec has positions for.
    #[error("{count} items but the layout has only {capacity} positions")]
    InsufficientPositions { count: usize, capacity: usize },

    /// A sequence step referenced a participant index outside this layout.
    #[error("unknown participant {index} (sequence has {count} participants)")]
    UnknownParticipant { index: usize, count: usize },
}

/// Rejects sizes that are not strictly positive and finite.
fn ensure_positive(what: &str, value: f32) -> Result<(), LayoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidGrid(format!(
            "{what} must be positive, got {value}"
        )))
    }
}

/// Rejects gaps that are negative or not finite.
fn ensure_non_negative(what: &str, value: f32) -> Result<(), LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidGrid(format!(
            "{what} must not be negative, got {value}"
        )))
    }
}

/// Rejects a pitch that would make consecutive items overlap.
fn ensure_pitch(what: &str, pitch: f32, extent: f32) -> Result<(), LayoutError> {
    ensure_positive(what, pitch)?;
    if pitch >= extent {
        Ok(())
    } else {
        Err(LayoutError::InvalidGrid(format!(
            "{what} {pitch} is shorter than the item extent {extent}"
        )))
    }
}
