//! Per-surface pass bookkeeping and the end-of-frame barrier.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::{
    context::Context,
    depth::DepthManager,
    error::{Error, Result},
    event::FrameInput,
    id::SurfaceId,
    registry::WindowRegistry,
    style::Skin,
};

/// Trait for driving surface passes.
///
/// A frame is one pass over every enabled surface, in any order. Shared
/// transient state is only reset once the last of them has finished.
pub trait FrameLifecycle {
    /// Start a declaration pass on `surface`.
    fn begin_pass(&mut self, surface: SurfaceId, input: &FrameInput) -> Result<()>;

    /// Finish a declaration pass. Fails with `UnclosedWindow` if a window is
    /// still open, after resetting the surface so the next frame can run.
    fn end_pass(&mut self, surface: SurfaceId) -> Result<()>;

    /// Have all enabled surfaces finished their pass?
    fn frame_complete(&self) -> bool;

    /// Reset shared per-frame state and start a new frame.
    fn barrier(&mut self);
}

impl FrameLifecycle for Context {
    fn begin_pass(&mut self, surface: SurfaceId, input: &FrameInput) -> Result<()> {
        let surf = self.surfaces.require_mut(surface)?;
        if surf.in_pass {
            return Err(Error::SurfaceBusy(surface));
        }
        surf.in_pass = true;
        surf.close_declaration();
        surf.declare_index = 0;
        if surf.skin.is_none() {
            warn!(surface = %surf.name, "no active skin, using the built-in dark skin");
            surf.skin = Some(Arc::new(Skin::dark()));
        }
        self.focus.observe(input.focused);
        self.input = *input;
        trace!(surface = %surf.name, "pass started");
        Ok(())
    }

    fn end_pass(&mut self, surface: SurfaceId) -> Result<()> {
        let surf = self.surfaces.require_mut(surface)?;
        let unclosed = if surf.declaring {
            surf.current
                .and_then(|slot| surf.windows.get(slot))
                .map(|w| w.name.clone())
        } else {
            None
        };
        surf.close_declaration();
        surf.in_pass = false;
        surf.finished = true;
        self.prune_surface(surface)?;
        if self.frame_complete() {
            self.barrier();
        }
        match unclosed {
            Some(name) => Err(Error::UnclosedWindow(name)),
            None => Ok(()),
        }
    }

    fn frame_complete(&self) -> bool {
        let mut enabled = self.surfaces.iter().filter(|(_, s)| s.enabled).peekable();
        enabled.peek().is_some() && enabled.all(|(_, s)| s.finished)
    }

    fn barrier(&mut self) {
        self.last_resolved = None;
        self.draw_control_ids = false;
        self.control_width = self.config.control_width;
        self.focus.roll();
        self.ids.reset();
        for s in self.surfaces.iter_mut() {
            s.close_declaration();
            s.finished = false;
        }
        self.surfaces.compact_depths();
        self.frames += 1;
        debug!(frame = self.frames, "frame complete");
    }
}
