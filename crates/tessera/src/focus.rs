//! Keyboard focus tracking across frame boundaries.

use crate::id::ControlId;

/// Remembers which control held focus at the last frame boundary, so a
/// field can tell that it has just lost focus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FocusTracker {
    /// Focus at the previous frame boundary.
    previous: Option<ControlId>,
    /// Focus as reported by the host this frame.
    current: Option<ControlId>,
}

impl FocusTracker {
    /// Record the host's focus for the current pass.
    pub fn observe(&mut self, focused: Option<ControlId>) {
        self.current = focused;
    }

    /// Advance to the next frame.
    pub fn roll(&mut self) {
        self.previous = self.current;
    }

    /// Does `id` have focus now?
    pub fn is_focused(&self, id: ControlId) -> bool {
        self.current == Some(id)
    }

    /// Did `id` have focus at the last boundary and lose it since?
    pub fn lost_focus(&self, id: ControlId) -> bool {
        self.previous == Some(id) && self.current != Some(id)
    }

    /// The currently focused control.
    pub fn current(&self) -> Option<ControlId> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_seen_for_one_frame() {
        let id = ControlId(7);
        let mut f = FocusTracker::default();
        f.observe(Some(id));
        assert!(f.is_focused(id));
        assert!(!f.lost_focus(id));
        f.roll();
        f.observe(None);
        assert!(f.lost_focus(id));
        f.roll();
        assert!(!f.lost_focus(id));
    }
}
