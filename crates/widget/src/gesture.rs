//! Drag-to-create gesture handling.
//!
//! A drag starts a zero-length provisional block at the pointer, stretches
//! it while the pointer moves and hands it to the edit dialog on release.
//! Nothing is committed here; the provisional block only becomes part of
//! the schedule once the edit dialog saves it.

use availability_core::models::AvailabilityBlock;
use tracing::debug;

use crate::geometry::Timeline;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging { block: AvailabilityBlock },
}

#[derive(Debug, Default)]
pub struct DragGesture {
    state: GestureState,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// The block being drawn, if a drag is in progress.
    pub fn provisional(&self) -> Option<&AvailabilityBlock> {
        match &self.state {
            GestureState::Dragging { block } => Some(block),
            GestureState::Idle => None,
        }
    }

    /// Starts a drag at `y`. A drag already in progress is abandoned.
    pub fn start(&mut self, timeline: &Timeline, y: f64, slot_duration_minutes: u32) {
        let start_time = timeline.y_to_time(y);
        debug!(y, %start_time, "Drag started");

        self.state = GestureState::Dragging {
            block: AvailabilityBlock::new(start_time, start_time, slot_duration_minutes),
        };
    }

    /// Moves the end of the provisional block to `y`.
    pub fn update(&mut self, timeline: &Timeline, y: f64) {
        if let GestureState::Dragging { block } = &mut self.state {
            block.end_time = timeline.y_to_time(y);
        }
    }

    /// Finishes the drag at `y`.
    ///
    /// Returns the block to edit with its ends in order, or `None` when no
    /// drag was active or the drag covered no time.
    pub fn release(&mut self, timeline: &Timeline, y: f64) -> Option<AvailabilityBlock> {
        let GestureState::Dragging { mut block } = std::mem::take(&mut self.state) else {
            return None;
        };

        block.end_time = timeline.y_to_time(y);
        let block = block.normalized();

        if block.is_empty() {
            debug!(time = %block.start_time, "Discarding zero-length drag");
            return None;
        }

        debug!(start = %block.start_time, end = %block.end_time, "Drag released");
        Some(block)
    }

    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }
}
