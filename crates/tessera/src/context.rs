//! The context object that owns all cross-surface state.

use std::path::Path;

use comfy_table::{ContentArrangement, Table, presets};
use tracing::debug;

use crate::{
    config::Config,
    error::Result,
    event::FrameInput,
    focus::FocusTracker,
    frame::FrameLifecycle,
    geom::{Expanse, Point, Rect},
    hit::HitTest,
    id::{SurfaceId, WindowHandle},
    ids::IdAllocator,
    interaction::Interaction,
    numeric::EditBuffers,
    persist::WindowStore,
    surface::{Surface, Surfaces},
    window::WindowDescriptor,
};

/// Window, depth, interaction and editing state shared by every surface.
///
/// One context drives one set of surfaces. Independent contexts share
/// nothing and can live side by side.
#[derive(Debug)]
pub struct Context {
    /// Tunables.
    pub(crate) config: Config,
    /// Registered surfaces and their descriptors.
    pub(crate) surfaces: Surfaces,
    /// The move/resize lock.
    pub(crate) interaction: Interaction,
    /// Control id allocation.
    pub(crate) ids: IdAllocator,
    /// In-progress numeric text.
    pub(crate) buffers: EditBuffers,
    /// Focus across frame boundaries.
    pub(crate) focus: FocusTracker,
    /// Saved placements awaiting their first declaration.
    pub(crate) store: Option<WindowStore>,
    /// Input for the pass in progress.
    pub(crate) input: FrameInput,
    /// Rectangle of the most recently resolved window, the cascade origin.
    pub(crate) last_resolved: Option<Rect>,
    /// Some window has already been created.
    pub(crate) first_resolved: bool,
    /// Creation counter for descriptors.
    pub(crate) next_serial: u64,
    /// Width of controls declared from now on.
    pub(crate) control_width: f32,
    /// Width of control labels.
    pub(crate) label_width: f32,
    /// Append control ids to labels.
    pub(crate) draw_control_ids: bool,
    /// Completed frames.
    pub(crate) frames: u64,
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Context {
    /// A context with no surfaces.
    pub fn new(config: Config) -> Self {
        Self {
            control_width: config.control_width,
            label_width: config.label_width,
            config,
            surfaces: Surfaces::default(),
            interaction: Interaction::default(),
            ids: IdAllocator::default(),
            buffers: EditBuffers::default(),
            focus: FocusTracker::default(),
            store: None,
            input: FrameInput::new(Expanse::default()),
            last_resolved: None,
            first_resolved: false,
            next_serial: 0,
            draw_control_ids: false,
            frames: 0,
        }
    }

    /// The configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register a surface. Surfaces are enabled on creation.
    pub fn add_surface(&mut self, name: &str) -> SurfaceId {
        let id = self.surfaces.insert(Surface::new(name));
        debug!(surface = name, "surface added");
        id
    }

    /// Drop a surface and every window it declared. Ends the frame if every
    /// remaining enabled surface has already finished its pass.
    pub fn remove_surface(&mut self, id: SurfaceId) -> Option<Surface> {
        let s = self.surfaces.remove(id)?;
        debug!(surface = %s.name, "surface removed");
        if self.interaction.grip().is_some_and(|g| g.handle.surface == id) {
            self.interaction.release();
        }
        if self.frame_complete() {
            self.barrier();
        }
        Some(s)
    }

    /// Enable or disable a surface. Disabled surfaces keep their windows but
    /// do not hold up the frame barrier.
    pub fn set_surface_enabled(&mut self, id: SurfaceId, enabled: bool) -> Result<()> {
        self.surfaces.require_mut(id)?.enabled = enabled;
        if !enabled && self.frame_complete() {
            self.barrier();
        }
        Ok(())
    }

    /// All surfaces.
    pub fn surfaces(&self) -> &Surfaces {
        &self.surfaces
    }

    /// A single surface.
    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(id)
    }

    /// The descriptor behind a handle.
    pub fn window(&self, h: WindowHandle) -> Option<&WindowDescriptor> {
        self.surfaces.window(h)
    }

    /// Find a window by surface and name.
    pub fn find_window(&self, surface: SurfaceId, name: &str) -> Option<WindowHandle> {
        let s = self.surfaces.get(surface)?;
        s.windows
            .iter()
            .position(|w| w.name == name)
            .map(|slot| WindowHandle::new(surface, slot))
    }

    /// The topmost window under a point.
    pub fn window_at(&self, p: Point) -> Option<WindowHandle> {
        self.surfaces.hit_test(p)
    }

    /// The move/resize lock.
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Force the interaction back to idle, abandoning any drag.
    pub fn cancel_interaction(&mut self) {
        self.interaction.release();
    }

    /// Focus tracking state.
    pub fn focus(&self) -> &FocusTracker {
        &self.focus
    }

    /// Numeric edit buffers.
    pub fn buffers(&self) -> &EditBuffers {
        &self.buffers
    }

    /// Number of completed frames.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Install saved placements to seed windows declared from now on.
    pub fn set_store(&mut self, store: WindowStore) {
        self.store = Some(store);
    }

    /// The installed store.
    pub fn store(&self) -> Option<&WindowStore> {
        self.store.as_ref()
    }

    /// Record every live window into the installed store, creating one if
    /// needed, and return it.
    pub fn sync_store(&mut self) -> &WindowStore {
        let mut store = self.store.take().unwrap_or_default();
        store.merge_from(self);
        self.store.insert(store)
    }

    /// Record every live window and write the store to `path`.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.sync_store().save(path)
    }

    /// A table of every surface and window, for debugging.
    pub fn dump(&self) -> String {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.load_preset(presets::UTF8_FULL);
        table.set_header(vec![
            "surface", "declared", "slot", "name", "rect", "depth", "state", "guid",
        ]);
        for (_, s) in self.surfaces.iter() {
            if s.windows.is_empty() {
                table.add_row(vec![
                    s.name.clone(),
                    s.declare_index.to_string(),
                    "-".to_string(),
                ]);
            }
            for (slot, w) in s.windows.iter().enumerate() {
                let state = match (w.open, w.content_active) {
                    (false, _) => "closed",
                    (true, true) => "open",
                    (true, false) => "collapsed",
                };
                table.add_row(vec![
                    s.name.clone(),
                    s.declare_index.to_string(),
                    slot.to_string(),
                    w.name.clone(),
                    format!(
                        "{},{} {}x{}",
                        w.rect.x(),
                        w.rect.y(),
                        w.rect.w,
                        w.rect.h
                    ),
                    w.depth.to_string(),
                    state.to_string(),
                    w.guid.to_string(),
                ]);
            }
        }
        table.to_string()
    }
}
