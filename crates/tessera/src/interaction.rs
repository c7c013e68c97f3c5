//! The single global move/resize lock.

use tracing::debug;
use uuid::Uuid;

use crate::{
    geom::{Expanse, Point, Rect},
    id::WindowHandle,
};

/// The window holding the interaction lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grip {
    /// Handle of the owning window.
    pub handle: WindowHandle,
    /// Identity of the owning descriptor, so a slot reassigned mid-drag is
    /// not mistaken for the owner.
    pub guid: Uuid,
}

/// Pointer interaction state. At most one window, across all surfaces, is
/// moved or resized at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    /// Nobody holds the lock.
    #[default]
    Idle,
    /// A window is being dragged by its header.
    Moving {
        /// Lock owner.
        grip: Grip,
        /// Pointer position at acquisition.
        pointer_anchor: Point,
        /// Window rectangle at acquisition.
        rect_anchor: Rect,
    },
    /// A window is being resized by its handle.
    Resizing {
        /// Lock owner.
        grip: Grip,
        /// Pointer position at acquisition.
        pointer_anchor: Point,
        /// Window rectangle at acquisition.
        rect_anchor: Rect,
    },
}

impl Interaction {
    /// Is the lock held?
    pub fn is_locked(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Is a window being moved?
    pub fn is_move(&self) -> bool {
        matches!(self, Self::Moving { .. })
    }

    /// Is a window being resized?
    pub fn is_resize(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// The current lock owner.
    pub fn grip(&self) -> Option<Grip> {
        match self {
            Self::Idle => None,
            Self::Moving { grip, .. } | Self::Resizing { grip, .. } => Some(*grip),
        }
    }

    /// Does `grip` hold the lock?
    pub fn is_owner(&self, grip: Grip) -> bool {
        self.grip() == Some(grip)
    }

    /// Start moving a window. Fails if the lock is held.
    pub fn start_move(&mut self, grip: Grip, pointer: Point, rect: Rect) -> bool {
        if self.is_locked() {
            return false;
        }
        debug!(slot = grip.handle.slot, "move started");
        *self = Self::Moving {
            grip,
            pointer_anchor: pointer,
            rect_anchor: rect,
        };
        true
    }

    /// Start resizing a window. Fails if the lock is held.
    pub fn start_resize(&mut self, grip: Grip, pointer: Point, rect: Rect) -> bool {
        if self.is_locked() {
            return false;
        }
        debug!(slot = grip.handle.slot, "resize started");
        *self = Self::Resizing {
            grip,
            pointer_anchor: pointer,
            rect_anchor: rect,
        };
        true
    }

    /// Drop the lock, whoever holds it.
    pub fn release(&mut self) {
        if self.is_locked() {
            debug!("interaction released");
        }
        *self = Self::Idle;
    }

    /// The rectangle `grip`'s window should have with the pointer at
    /// `pointer`, or `None` if `grip` does not hold the lock.
    pub fn apply(
        &self,
        grip: Grip,
        rect: Rect,
        pointer: Point,
        header_height: f32,
        min_size: Expanse,
        viewport: Rect,
    ) -> Option<Rect> {
        match *self {
            Self::Moving {
                grip: g,
                pointer_anchor,
                rect_anchor,
            } if g == grip => {
                let tl = rect_anchor.tl + (pointer - pointer_anchor);
                Some(clamp_header(rect.at(tl), header_height, viewport))
            }
            Self::Resizing {
                grip: g,
                pointer_anchor,
                rect_anchor,
            } if g == grip => {
                let delta = pointer - pointer_anchor;
                let size = Expanse::new(rect_anchor.w + delta.x, rect_anchor.h + delta.y);
                Some(rect.with_expanse(clamp_size(size, min_size, viewport.expanse())))
            }
            _ => None,
        }
    }
}

/// Keep a window's header inside the viewport. Only the header band is
/// considered, so the body may hang off the bottom edge.
pub fn clamp_header(rect: Rect, header_height: f32, viewport: Rect) -> Rect {
    let band = rect.with_height(header_height).clamp_within(&viewport);
    band.with_height(rect.h)
}

/// Clamp a window size to `[min, viewport - min]` on each axis. The minimum
/// wins when the viewport is too small to satisfy both.
pub fn clamp_size(size: Expanse, min: Expanse, viewport: Expanse) -> Expanse {
    size.clamp(min, Expanse::new(viewport.w - min.w, viewport.h - min.h))
}

#[cfg(test)]
mod tests {
    use slotmap::KeyData;

    use super::*;
    use crate::id::SurfaceId;

    fn grip(slot: usize) -> Grip {
        Grip {
            handle: WindowHandle::new(SurfaceId::from(KeyData::from_ffi(1)), slot),
            guid: Uuid::from_u128(slot as u128 + 1),
        }
    }

    const VIEW: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);
    const MIN: Expanse = Expanse::new(48.0, 48.0);

    #[test]
    fn lock_is_exclusive() {
        let mut i = Interaction::default();
        assert!(i.start_move(grip(0), Point::zero(), Rect::default()));
        assert!(!i.start_resize(grip(1), Point::zero(), Rect::default()));
        assert!(i.is_owner(grip(0)));
        assert!(!i.is_owner(grip(1)));
        i.release();
        assert!(!i.is_locked());
        assert!(i.start_resize(grip(1), Point::zero(), Rect::default()));
        assert!(i.is_resize());
    }

    #[test]
    fn move_follows_pointer_and_clamps_header() {
        let mut i = Interaction::default();
        let r = Rect::new(10.0, 10.0, 300.0, 200.0);
        i.start_move(grip(0), Point::new(20.0, 15.0), r);
        let moved = i.apply(grip(0), r, Point::new(70.0, 45.0), 25.0, MIN, VIEW);
        assert_eq!(moved, Some(Rect::new(60.0, 40.0, 300.0, 200.0)));

        // Dragged far down: only the header must stay visible.
        let low = i.apply(grip(0), r, Point::new(20.0, 1000.0), 25.0, MIN, VIEW);
        assert_eq!(low, Some(Rect::new(10.0, 575.0, 300.0, 200.0)));

        assert_eq!(i.apply(grip(1), r, Point::zero(), 25.0, MIN, VIEW), None);
    }

    #[test]
    fn oversized_window_keeps_header_start_visible() {
        let mut i = Interaction::default();
        let wide = Rect::new(0.0, 10.0, 1000.0, 200.0);
        i.start_move(grip(0), Point::new(50.0, 20.0), wide);
        let dragged = i.apply(grip(0), wide, Point::new(250.0, 20.0), 25.0, MIN, VIEW);
        assert_eq!(dragged, Some(Rect::new(0.0, 10.0, 1000.0, 200.0)));
    }

    #[test]
    fn resize_clamps_to_minimum() {
        let mut i = Interaction::default();
        let r = Rect::new(10.0, 10.0, 300.0, 200.0);
        i.start_resize(grip(0), Point::new(300.0, 200.0), r);
        let small = i.apply(grip(0), r, Point::new(-100.0, -200.0), 25.0, MIN, VIEW);
        assert_eq!(small, Some(Rect::new(10.0, 10.0, 48.0, 48.0)));
        let big = i.apply(grip(0), r, Point::new(5000.0, 5000.0), 25.0, MIN, VIEW);
        assert_eq!(big, Some(Rect::new(10.0, 10.0, 752.0, 552.0)));
    }

    #[test]
    fn tiny_viewport_prefers_minimum() {
        assert_eq!(
            clamp_size(Expanse::new(10.0, 10.0), MIN, Expanse::new(60.0, 60.0)),
            MIN
        );
        assert_eq!(
            clamp_size(
                Expanse::new(500.0, 10.0),
                Expanse::new(100.0, 20.0),
                Expanse::new(800.0, 600.0)
            ),
            Expanse::new(500.0, 20.0)
        );
    }
}
