//! Horizontal state-machine flows.

use vellum_core::geometry::{Bounds, Point, Segment, Size};

use super::{LayoutError, ensure_pitch, ensure_positive};

#[derive(Debug, Clone, PartialEq)]
enum Placement {
    Even { start_x: f32, pitch: f32 },
    Explicit(Vec<f32>),
}

/// Placement of state nodes on a single horizontal line.
///
/// All nodes share `y` and `node_size`. Nodes are either spaced evenly from
/// `start_x` or placed at explicit x positions. Transition arrows run from
/// the right edge of node `i` to the left edge of node `i + 1` at the nodes'
/// vertical center.
///
/// # Examples
///
/// ```
/// use vellum::layout::StateFlowSpec;
///
/// let flow = StateFlowSpec::even(0.5, 1.9, 2.0, 1.5, 0.9).unwrap();
/// let arrows = flow.transitions(5).unwrap();
/// assert_eq!(arrows.len(), 4);
/// assert!((arrows[0].origin().x() - 2.0).abs() < 1e-5);
/// assert!((arrows[0].dx() - 0.4).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StateFlowSpec {
    placement: Placement,
    y: f32,
    node_size: Size,
    label_size: Size,
    label_gap: f32,
}

impl StateFlowSpec {
    /// Creates a flow with nodes at `start_x + i · pitch`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidGrid`] if the node size is not positive
    /// or the pitch is shorter than the node width.
    pub fn even(
        start_x: f32,
        pitch: f32,
        y: f32,
        node_width: f32,
        node_height: f32,
    ) -> Result<Self, LayoutError> {
        ensure_positive("node width", node_width)?;
        ensure_pitch("pitch", pitch, node_width)?;
        Self::with_placement(Placement::Even { start_x, pitch }, y, node_width, node_height)
    }

    /// Creates a flow with nodes at the given x positions.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidGrid`] if the node size is not positive.
    pub fn explicit(
        xs: Vec<f32>,
        y: f32,
        node_width: f32,
        node_height: f32,
    ) -> Result<Self, LayoutError> {
        Self::with_placement(Placement::Explicit(xs), y, node_width, node_height)
    }

    fn with_placement(
        placement: Placement,
        y: f32,
        node_width: f32,
        node_height: f32,
    ) -> Result<Self, LayoutError> {
        ensure_positive("node width", node_width)?;
        ensure_positive("node height", node_height)?;

        Ok(Self {
            placement,
            y,
            node_size: Size::new(node_width, node_height),
            label_size: Size::new(1.0, 0.5),
            label_gap: 0.2,
        })
    }

    /// Sets the size of transition labels and their distance below the nodes.
    pub fn with_labels(mut self, width: f32, height: f32, gap: f32) -> Self {
        self.label_size = Size::new(width, height);
        self.label_gap = gap;
        self
    }

    /// Returns the number of nodes the layout can place, if it is bounded.
    ///
    /// Evenly spaced flows place any number of nodes and return `None`.
    pub fn capacity(&self) -> Option<usize> {
        match &self.placement {
            Placement::Even { .. } => None,
            Placement::Explicit(xs) => Some(xs.len()),
        }
    }

    fn node_x(&self, index: usize) -> Option<f32> {
        match &self.placement {
            Placement::Even { start_x, pitch } => Some(start_x + index as f32 * pitch),
            Placement::Explicit(xs) => xs.get(index).copied(),
        }
    }

    /// Returns the frame of node `index`.
    ///
    /// Returns `None` when an explicit placement has no position for `index`.
    pub fn node_bounds(&self, index: usize) -> Option<Bounds> {
        let x = self.node_x(index)?;
        Some(Bounds::new_from_top_left(Point::new(x, self.y), self.node_size))
    }

    /// Returns the frames of the first `count` nodes.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientPositions`] if an explicit placement
    /// has fewer than `count` positions.
    pub fn nodes(&self, count: usize) -> Result<Vec<Bounds>, LayoutError> {
        if let Some(capacity) = self.capacity().filter(|&capacity| capacity < count) {
            return Err(LayoutError::InsufficientPositions { count, capacity });
        }
        Ok((0..count).filter_map(|index| self.node_bounds(index)).collect())
    }

    /// Returns the transition arrows between `count` consecutive nodes.
    ///
    /// There are exactly `count - 1` arrows, and none for `count <= 1`.
    ///
    /// # Errors
    ///
    /// Fails like [`StateFlowSpec::nodes`].
    pub fn transitions(&self, count: usize) -> Result<Vec<Segment>, LayoutError> {
        let nodes = self.nodes(count)?;
        let center_y = self.y + self.node_size.height() / 2.0;

        Ok(nodes
            .windows(2)
            .map(|pair| {
                Segment::new(
                    Point::new(pair[0].max_x(), center_y),
                    pair[1].min_x() - pair[0].max_x(),
                    0.0,
                )
            })
            .collect())
    }

    /// Returns the frame of the label for the transition after node `index`.
    ///
    /// The label is centered horizontally under the gap between node `index`
    /// and node `index + 1`.
    pub fn label_bounds(&self, index: usize) -> Option<Bounds> {
        let left = self.node_bounds(index)?;
        let right = self.node_bounds(index + 1)?;
        let center_x = (left.max_x() + right.min_x()) / 2.0;
        let top = left.max_y() + self.label_gap;

        Some(Bounds::new(
            center_x - self.label_size.width() / 2.0,
            top,
            self.label_size.width(),
            self.label_size.height(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn calculator_flow() -> StateFlowSpec {
        StateFlowSpec::even(0.5, 1.9, 2.0, 1.5, 0.9).unwrap()
    }

    #[test]
    fn test_even_and_explicit_placement_agree() {
        let even = calculator_flow();
        let explicit =
            StateFlowSpec::explicit(vec![0.5, 2.4, 4.3, 6.2, 8.1], 2.0, 1.5, 0.9).unwrap();

        for (a, b) in even.nodes(5).unwrap().iter().zip(explicit.nodes(5).unwrap()) {
            assert_approx_eq!(f32, a.min_x(), b.min_x(), epsilon = 1e-5);
            assert_approx_eq!(f32, a.min_y(), b.min_y());
        }
    }

    #[test]
    fn test_transitions_connect_adjacent_edges() {
        let flow = calculator_flow();
        let nodes = flow.nodes(5).unwrap();
        let arrows = flow.transitions(5).unwrap();

        assert_eq!(arrows.len(), 4);
        for (i, arrow) in arrows.iter().enumerate() {
            assert_approx_eq!(f32, arrow.origin().x(), nodes[i].max_x(), epsilon = 1e-5);
            assert_approx_eq!(f32, arrow.end().x(), nodes[i + 1].min_x(), epsilon = 1e-5);
            assert_approx_eq!(f32, arrow.origin().y(), 2.45, epsilon = 1e-5);
            assert_eq!(arrow.dy(), 0.0);
        }
    }

    #[test]
    fn test_single_node_has_no_transitions() {
        let flow = calculator_flow();
        assert!(flow.transitions(0).unwrap().is_empty());
        assert!(flow.transitions(1).unwrap().is_empty());
    }

    #[test]
    fn test_explicit_placement_is_bounded() {
        let flow = StateFlowSpec::explicit(vec![1.0, 3.0], 1.0, 1.0, 1.0).unwrap();
        assert_eq!(flow.capacity(), Some(2));
        assert_eq!(flow.nodes(2).unwrap().len(), 2);
        assert_eq!(flow.transitions(2).unwrap().len(), 1);
        assert_eq!(
            flow.nodes(5),
            Err(LayoutError::InsufficientPositions {
                count: 5,
                capacity: 2
            })
        );
        assert!(flow.transitions(3).is_err());
        assert!(flow.node_bounds(2).is_none());
        assert!(flow.label_bounds(1).is_none());
    }

    #[test]
    fn test_label_is_centered_under_gap() {
        let label = calculator_flow().label_bounds(0).unwrap();
        assert_approx_eq!(f32, label.min_x(), 1.7, epsilon = 1e-5);
        assert_approx_eq!(f32, label.min_y(), 3.1, epsilon = 1e-5);
        assert_approx_eq!(f32, label.width(), 1.0);
        assert_approx_eq!(f32, label.height(), 0.5);
    }

    #[test]
    fn test_invalid_flow_is_rejected() {
        assert!(StateFlowSpec::even(0.0, 0.0, 0.0, 1.0, 1.0).is_err());
        assert!(StateFlowSpec::explicit(vec![], 0.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_pitch_shorter_than_node_is_rejected() {
        assert!(matches!(
            StateFlowSpec::even(0.5, 1.0, 2.0, 1.5, 0.9),
            Err(LayoutError::InvalidGrid(_))
        ));

        let touching = StateFlowSpec::even(0.0, 1.5, 2.0, 1.5, 0.9).unwrap();
        let arrows = touching.transitions(3).unwrap();
        assert!(arrows.iter().all(|arrow| arrow.dx() >= 0.0));
    }
}
