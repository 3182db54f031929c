//! Sequence-diagram geometry: participant boxes, lifelines and messages.

use vellum_core::geometry::{Bounds, Point, Segment, Size};

use super::{LayoutError, ensure_positive};

/// Fraction of a message's width by which its label is indented.
const LABEL_INDENT: f32 = 0.1;
/// Fraction of a message's width the label may occupy.
const LABEL_WIDTH: f32 = 0.9;

/// Placement of sequence-diagram participants.
///
/// Participants sit side by side at fixed x positions, all with the same box
/// size and top edge. A participant's lifeline runs from the bottom of its
/// box down to `bottom`. Messages are horizontal segments between the
/// centerlines of two participants; their geometry does not depend on the
/// direction they point in.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSpec {
    participant_xs: Vec<f32>,
    participant_y: f32,
    participant_size: Size,
    bottom: f32,
    label_height: f32,
    label_lift: f32,
}

impl SequenceSpec {
    /// Creates a sequence spec.
    ///
    /// # Arguments
    ///
    /// * `participant_xs` - Left edge of every participant box, in order
    /// * `participant_y` - Top edge shared by all participant boxes
    /// * `participant_size` - Size shared by all participant boxes
    /// * `bottom` - Y coordinate where lifelines end
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidGrid`] if the box size is not positive or
    /// `bottom` lies above the participant boxes.
    pub fn new(
        participant_xs: Vec<f32>,
        participant_y: f32,
        participant_size: Size,
        bottom: f32,
    ) -> Result<Self, LayoutError> {
        ensure_positive("participant width", participant_size.width())?;
        ensure_positive("participant height", participant_size.height())?;
        if bottom < participant_y + participant_size.height() {
            return Err(LayoutError::InvalidGrid(format!(
                "lifeline bottom {bottom} lies above the participant boxes"
            )));
        }

        Ok(Self {
            participant_xs,
            participant_y,
            participant_size,
            bottom,
            label_height: 0.18,
            label_lift: 0.2,
        })
    }

    pub fn participant_count(&self) -> usize {
        self.participant_xs.len()
    }

    fn participant_x(&self, index: usize) -> Result<f32, LayoutError> {
        self.participant_xs
            .get(index)
            .copied()
            .ok_or(LayoutError::UnknownParticipant {
                index,
                count: self.participant_xs.len(),
            })
    }

    /// Returns the box of participant `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownParticipant`] for an index outside this layout.
    pub fn participant_bounds(&self, index: usize) -> Result<Bounds, LayoutError> {
        let x = self.participant_x(index)?;
        Ok(Bounds::new_from_top_left(
            Point::new(x, self.participant_y),
            self.participant_size,
        ))
    }

    /// Returns the x coordinate of the centerline of participant `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownParticipant`] for an index outside this layout.
    pub fn centerline(&self, index: usize) -> Result<f32, LayoutError> {
        Ok(self.participant_x(index)? + self.participant_size.width() / 2.0)
    }

    /// Returns the lifeline of participant `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownParticipant`] for an index outside this layout.
    pub fn lifeline(&self, index: usize) -> Result<Segment, LayoutError> {
        let x = self.centerline(index)?;
        let top = self.participant_y + self.participant_size.height();
        Ok(Segment::vertical(x, top, self.bottom))
    }

    /// Returns the message segment between participants `from` and `to` at `y`.
    ///
    /// The segment starts at the leftmost of the two centerlines and has a
    /// non-negative width, so a message and its reply have the same geometry.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownParticipant`] if either index is outside
    /// this layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum::layout::SequenceSpec;
    /// use vellum_core::geometry::Size;
    ///
    /// let spec = SequenceSpec::new(vec![0.6, 2.3, 4.0], 1.75, Size::new(1.3, 0.4), 5.27).unwrap();
    /// let forward = spec.message(0, 2, 3.0).unwrap();
    /// let reply = spec.message(2, 0, 3.0).unwrap();
    /// assert_eq!(forward, reply);
    /// assert!((forward.dx() - 3.4).abs() < 1e-5);
    /// ```
    pub fn message(&self, from: usize, to: usize, y: f32) -> Result<Segment, LayoutError> {
        let from_x = self.centerline(from)?;
        let to_x = self.centerline(to)?;
        Ok(Segment::horizontal(from_x, to_x, y))
    }

    /// Returns the frame of the label drawn above a message.
    ///
    /// The label starts 10% into the segment, spans 90% of its width and
    /// sits just above it.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownParticipant`] if either index is outside
    /// this layout.
    pub fn label_bounds(&self, from: usize, to: usize, y: f32) -> Result<Bounds, LayoutError> {
        let segment = self.message(from, to, y)?;
        let width = segment.dx();
        Ok(Bounds::new(
            segment.origin().x() + width * LABEL_INDENT,
            y - self.label_lift,
            width * LABEL_WIDTH,
            self.label_height,
        ))
    }
}
