//! Global stacking order across all surfaces.

use tracing::trace;

use crate::{id::WindowHandle, surface::Surfaces};

/// Trait for managing window depth. Depth 0 is topmost; larger values sit
/// further back.
pub trait DepthManager {
    /// Bring a window to the front. Every other window on every surface is
    /// pushed back by one. Returns `false` if the window was already
    /// topmost or does not exist.
    fn promote_to_front(&mut self, target: WindowHandle) -> bool;

    /// Renumber depths to 0..n, preserving relative order. Ties are broken
    /// by creation order, older windows in front.
    fn compact_depths(&mut self);

    /// The topmost window, if any.
    fn topmost(&self) -> Option<WindowHandle>;
}

impl DepthManager for Surfaces {
    fn promote_to_front(&mut self, target: WindowHandle) -> bool {
        match self.window(target) {
            Some(w) if w.depth != 0 => {}
            _ => return false,
        }
        for w in self.windows_mut() {
            w.depth = w.depth.saturating_add(1);
        }
        if let Some(w) = self.window_mut(target) {
            w.depth = 0;
            trace!(window = %w.name, "promoted to front");
        }
        true
    }

    fn compact_depths(&mut self) {
        let mut all: Vec<_> = self.windows_mut().collect();
        all.sort_by_key(|w| (w.depth, w.serial));
        for (depth, w) in all.into_iter().enumerate() {
            w.depth = u32::try_from(depth).unwrap_or(u32::MAX);
        }
    }

    fn topmost(&self) -> Option<WindowHandle> {
        self.windows()
            .min_by_key(|(_, w)| (w.depth, w.serial))
            .map(|(h, _)| h)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{geom::Rect, surface::Surface, window::WindowDescriptor};

    fn surfaces(depths: &[&[u32]]) -> Surfaces {
        let mut s = Surfaces::default();
        let mut serial = 0;
        for (i, ds) in depths.iter().enumerate() {
            let mut surf = Surface::new(&format!("s{i}"));
            for d in ds.iter() {
                surf.windows.push(WindowDescriptor::new(
                    "w",
                    serial,
                    Rect::new(0.0, 0.0, 10.0, 10.0),
                    5.0,
                    *d,
                    true,
                    true,
                ));
                serial += 1;
            }
            s.insert(surf);
        }
        s
    }

    fn depths(s: &Surfaces) -> Vec<u32> {
        s.windows().map(|(_, w)| w.depth).collect()
    }

    #[test]
    fn promote_shifts_everything_else() {
        let mut s = surfaces(&[&[0, 2], &[1]]);
        let ids = s.ids().to_vec();
        assert!(s.promote_to_front(WindowHandle::new(ids[1], 0)));
        assert_eq!(depths(&s), vec![1, 3, 0]);
        assert_eq!(s.topmost(), Some(WindowHandle::new(ids[1], 0)));
    }

    #[test]
    fn promote_topmost_is_noop() {
        let mut s = surfaces(&[&[0, 1]]);
        let id = s.ids()[0];
        assert!(!s.promote_to_front(WindowHandle::new(id, 0)));
        assert!(!s.promote_to_front(WindowHandle::new(id, 7)));
        assert_eq!(depths(&s), vec![0, 1]);
    }

    #[test]
    fn compaction_preserves_order() {
        let mut s = surfaces(&[&[4, 9], &[4, 0]]);
        s.compact_depths();
        assert_eq!(depths(&s), vec![1, 3, 2, 0]);
    }

    proptest! {
        #[test]
        fn promote_then_compact_is_contiguous(
            a in prop::collection::vec(0u32..20, 1..6),
            b in prop::collection::vec(0u32..20, 0..6),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut s = surfaces(&[a.as_slice(), b.as_slice()]);
            let handles: Vec<_> = s.windows().map(|(h, _)| h).collect();
            let target = handles[pick.index(handles.len())];
            let promoted = s.promote_to_front(target);
            s.compact_depths();
            let mut got = depths(&s);
            got.sort_unstable();
            let want: Vec<u32> = (0..got.len() as u32).collect();
            prop_assert_eq!(got, want);
            if promoted {
                prop_assert_eq!(s.window(target).map(|w| w.depth), Some(0));
            }
        }
    }
}
