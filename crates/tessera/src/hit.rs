//! Pointer hit-testing over the windows of every surface.

use crate::{geom::Point, id::WindowHandle, surface::Surfaces};

/// Trait for resolving which window is under a point.
pub trait HitTest {
    /// The topmost open window under `p`. Expanded windows are tested
    /// against their whole rectangle, collapsed ones against their header.
    fn hit_test(&self, p: Point) -> Option<WindowHandle>;
}

impl HitTest for Surfaces {
    fn hit_test(&self, p: Point) -> Option<WindowHandle> {
        self.windows()
            .filter(|(_, w)| w.hit(p))
            .min_by_key(|(_, w)| (w.depth, w.serial))
            .map(|(h, _)| h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geom::Rect, surface::Surface, window::WindowDescriptor};

    fn win(serial: u64, rect: Rect, depth: u32, active: bool) -> WindowDescriptor {
        WindowDescriptor::new("w", serial, rect, 25.0, depth, active, true)
    }

    #[test]
    fn topmost_wins_across_surfaces() {
        let mut s = Surfaces::default();
        let mut a = Surface::new("a");
        a.windows.push(win(0, Rect::new(0.0, 0.0, 100.0, 100.0), 1, true));
        let mut b = Surface::new("b");
        b.windows.push(win(1, Rect::new(50.0, 50.0, 100.0, 100.0), 0, true));
        let a = s.insert(a);
        let b = s.insert(b);

        assert_eq!(s.hit_test(Point::new(75.0, 75.0)), Some(WindowHandle::new(b, 0)));
        assert_eq!(s.hit_test(Point::new(10.0, 10.0)), Some(WindowHandle::new(a, 0)));
        assert_eq!(s.hit_test(Point::new(500.0, 500.0)), None);
    }

    #[test]
    fn collapsed_window_only_hits_header() {
        let mut s = Surfaces::default();
        let mut a = Surface::new("a");
        a.windows.push(win(0, Rect::new(0.0, 0.0, 100.0, 100.0), 0, false));
        a.windows.push(win(1, Rect::new(0.0, 0.0, 100.0, 100.0), 1, true));
        let a = s.insert(a);

        assert_eq!(s.hit_test(Point::new(10.0, 10.0)), Some(WindowHandle::new(a, 0)));
        assert_eq!(s.hit_test(Point::new(10.0, 60.0)), Some(WindowHandle::new(a, 1)));
    }

    #[test]
    fn closed_windows_are_skipped() {
        let mut s = Surfaces::default();
        let mut a = Surface::new("a");
        let mut closed = win(0, Rect::new(0.0, 0.0, 100.0, 100.0), 0, true);
        closed.open = false;
        a.windows.push(closed);
        a.windows.push(win(1, Rect::new(0.0, 0.0, 100.0, 100.0), 1, true));
        let a = s.insert(a);
        assert_eq!(s.hit_test(Point::new(10.0, 10.0)), Some(WindowHandle::new(a, 1)));
    }
}
