//! Horizontal swipe recognition.

/// Minimum horizontal travel, in logical pixels, for a drag to count.
/// Travel exactly at the threshold does not count.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// What a completed drag asks the carousel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Dragged leftward past the threshold.
    Next,
    /// Dragged rightward past the threshold.
    Previous,
    /// Too short, or no drag in progress.
    None,
}

/// Tracks a single pointer drag from press to release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<f32>,
    end: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer pressed at horizontal position `x`.
    pub fn begin(&mut self, x: f32) {
        self.start = Some(x);
        self.end = None;
    }

    /// Pointer moved to `x`. Ignored when no drag is in progress.
    pub fn update(&mut self, x: f32) {
        if self.start.is_some() {
            self.end = Some(x);
        }
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Pointer released; classify the drag and reset.
    ///
    /// A press without movement is a tap, never a swipe.
    pub fn end(&mut self) -> SwipeOutcome {
        let outcome = match (self.start.take(), self.end.take()) {
            (Some(start), Some(end)) => classify(start - end),
            _ => SwipeOutcome::None,
        };
        tracing::trace!(?outcome, "swipe ended");
        outcome
    }

    /// Abandon the drag (pointer left the surface).
    pub fn cancel(&mut self) {
        self.start = None;
        self.end = None;
    }
}

/// Classify a drag by `start - end` travel.
pub fn classify(delta: f32) -> SwipeOutcome {
    if delta > SWIPE_THRESHOLD {
        SwipeOutcome::Next
    } else if delta < -SWIPE_THRESHOLD {
        SwipeOutcome::Previous
    } else {
        SwipeOutcome::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(from: f32, to: f32) -> SwipeOutcome {
        let mut tracker = SwipeTracker::new();
        tracker.begin(from);
        tracker.update(to);
        tracker.end()
    }

    #[test]
    fn leftward_drag_past_threshold_is_next() {
        assert_eq!(drag(300.0, 240.0), SwipeOutcome::Next);
    }

    #[test]
    fn rightward_drag_past_threshold_is_previous() {
        assert_eq!(drag(100.0, 160.0), SwipeOutcome::Previous);
    }

    #[test]
    fn short_drag_is_ignored() {
        assert_eq!(drag(300.0, 260.0), SwipeOutcome::None);
        assert_eq!(drag(300.0, 250.0), SwipeOutcome::None);
    }

    #[test]
    fn tap_is_not_a_swipe() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(200.0);
        assert_eq!(tracker.end(), SwipeOutcome::None);
    }

    #[test]
    fn movement_without_press_is_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.update(10.0);
        assert!(!tracker.is_active());
        assert_eq!(tracker.end(), SwipeOutcome::None);
    }
}
