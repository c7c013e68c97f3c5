//! Control identity allocation.

use std::{
    collections::HashMap,
    hash::{DefaultHasher, Hash, Hasher},
};

use crate::{geom::Rect, id::ControlId};

/// Derives control ids from a hint string and the layout cursor.
///
/// The same hint at the same cursor position yields the same id every frame.
/// Repeated declarations with an identical hint and cursor within a frame are
/// told apart by an occurrence counter that is cleared at the frame barrier.
#[derive(Debug, Default)]
pub struct IdAllocator {
    /// Occurrences of each base key this frame.
    seen: HashMap<u64, u32>,
}

impl IdAllocator {
    /// Allocate an id for a control declared at `cursor`.
    pub fn allocate(&mut self, hint: &str, cursor: Rect) -> ControlId {
        let base = base_key(hint, cursor);
        let n = self.seen.entry(base).or_insert(0);
        let occurrence = *n;
        *n += 1;

        let mut h = DefaultHasher::new();
        base.hash(&mut h);
        occurrence.hash(&mut h);
        let folded = h.finish();
        // Zero is never handed out, so hosts can use it as "no control".
        ControlId(((folded >> 32) as u32 ^ folded as u32).max(1))
    }

    /// Forget this frame's occurrences.
    pub fn reset(&mut self) {
        self.seen.clear();
    }
}

/// Hash of a hint and cursor rectangle.
fn base_key(hint: &str, cursor: Rect) -> u64 {
    let mut h = DefaultHasher::new();
    hint.hash(&mut h);
    for v in [cursor.x(), cursor.y(), cursor.w, cursor.h] {
        v.to_bits().hash(&mut h);
    }
    h.finish()
}
