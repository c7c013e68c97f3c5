use std::fmt;

use slotmap::new_key_type;

new_key_type! {
    /// Opaque identifier for a surface stored in the context arena.
    pub struct SurfaceId;
}

/// Stable handle to a window descriptor: the owning surface plus the
/// descriptor's slot in that surface's declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle {
    /// Owning surface.
    pub surface: SurfaceId,
    /// Declaration slot within the surface.
    pub slot: usize,
}

impl WindowHandle {
    /// Construct a handle.
    pub fn new(surface: SurfaceId, slot: usize) -> Self {
        Self { surface, slot }
    }
}

/// Per-declaration control identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub u32);

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
