//! Surfaces and the arena that owns them.

use std::sync::Arc;

use slotmap::SlotMap;

use crate::{
    error::{Error, Result},
    id::{SurfaceId, WindowHandle},
    style::Skin,
    window::WindowDescriptor,
};

/// An independent source of window declarations.
#[derive(Debug, Default)]
pub struct Surface {
    /// Human readable name, used in diagnostics.
    pub(crate) name: String,
    /// Descriptors in declaration order.
    pub(crate) windows: Vec<WindowDescriptor>,
    /// Number of windows declared so far in the current pass.
    pub(crate) declare_index: usize,
    /// A window is open and awaiting `end_window`.
    pub(crate) declaring: bool,
    /// Controls may be declared.
    pub(crate) can_draw_control: bool,
    /// The open window's body is expanded, so controls are emitted.
    pub(crate) content_visible: bool,
    /// The open window began a layout area that `end_window` must close.
    pub(crate) area_open: bool,
    /// Slot of the window currently being declared.
    pub(crate) current: Option<usize>,
    /// A pass is in progress.
    pub(crate) in_pass: bool,
    /// The surface has finished its pass for this frame.
    pub(crate) finished: bool,
    /// Disabled surfaces neither run nor hold up the frame barrier.
    pub(crate) enabled: bool,
    /// Active skin.
    pub(crate) skin: Option<Arc<Skin>>,
}

impl Surface {
    /// A new, enabled surface.
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
            ..Default::default()
        }
    }

    /// Surface name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptors in declaration order.
    pub fn windows(&self) -> &[WindowDescriptor] {
        &self.windows
    }

    /// Is the surface enabled?
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Is a window open for declaration?
    pub fn is_declaring(&self) -> bool {
        self.declaring
    }

    /// Has the surface completed its pass this frame?
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Forget the per-window declaration state.
    pub(crate) fn close_declaration(&mut self) {
        self.declaring = false;
        self.can_draw_control = false;
        self.content_visible = false;
        self.area_open = false;
        self.current = None;
    }
}

/// Arena of surfaces, remembering registration order.
#[derive(Debug, Default)]
pub struct Surfaces {
    /// Surface storage.
    arena: SlotMap<SurfaceId, Surface>,
    /// Registration order.
    order: Vec<SurfaceId>,
}

impl Surfaces {
    /// Register a surface.
    pub(crate) fn insert(&mut self, surface: Surface) -> SurfaceId {
        let id = self.arena.insert(surface);
        self.order.push(id);
        id
    }

    /// Remove a surface and its descriptors.
    pub(crate) fn remove(&mut self, id: SurfaceId) -> Option<Surface> {
        self.order.retain(|s| *s != id);
        self.arena.remove(id)
    }

    /// Look a surface up.
    pub fn get(&self, id: SurfaceId) -> Option<&Surface> {
        self.arena.get(id)
    }

    /// Look a surface up mutably.
    pub(crate) fn get_mut(&mut self, id: SurfaceId) -> Option<&mut Surface> {
        self.arena.get_mut(id)
    }

    /// Look a surface up, failing with `UnknownSurface`.
    pub(crate) fn require(&self, id: SurfaceId) -> Result<&Surface> {
        self.arena.get(id).ok_or(Error::UnknownSurface(id))
    }

    /// Look a surface up mutably, failing with `UnknownSurface`.
    pub(crate) fn require_mut(&mut self, id: SurfaceId) -> Result<&mut Surface> {
        self.arena.get_mut(id).ok_or(Error::UnknownSurface(id))
    }

    /// Surface ids in registration order.
    pub fn ids(&self) -> &[SurfaceId] {
        &self.order
    }

    /// Surfaces in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (SurfaceId, &Surface)> {
        self.order
            .iter()
            .filter_map(|id| self.arena.get(*id).map(|s| (*id, s)))
    }

    /// All surfaces, mutably, in arbitrary order.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Surface> {
        self.arena.values_mut()
    }

    /// Every descriptor with its handle, surfaces in registration order.
    pub fn windows(&self) -> impl Iterator<Item = (WindowHandle, &WindowDescriptor)> {
        self.iter().flat_map(|(id, s)| {
            s.windows
                .iter()
                .enumerate()
                .map(move |(slot, w)| (WindowHandle::new(id, slot), w))
        })
    }

    /// Every descriptor, mutably, in arbitrary order.
    pub(crate) fn windows_mut(&mut self) -> impl Iterator<Item = &mut WindowDescriptor> {
        self.arena.values_mut().flat_map(|s| s.windows.iter_mut())
    }

    /// The descriptor behind a handle.
    pub fn window(&self, h: WindowHandle) -> Option<&WindowDescriptor> {
        self.arena.get(h.surface).and_then(|s| s.windows.get(h.slot))
    }

    /// The descriptor behind a handle, mutably.
    pub(crate) fn window_mut(&mut self, h: WindowHandle) -> Option<&mut WindowDescriptor> {
        self.arena
            .get_mut(h.surface)
            .and_then(|s| s.windows.get_mut(h.slot))
    }

    /// Number of registered surfaces.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no surfaces are registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
