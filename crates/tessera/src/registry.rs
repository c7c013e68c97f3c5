//! Matching declarations to window descriptors.

use tracing::debug;

use crate::{
    config::IdentityMode,
    context::Context,
    error::Result,
    geom::Rect,
    id::{SurfaceId, WindowHandle},
    window::WindowDescriptor,
};

/// Trait for resolving declared windows to persistent descriptors.
pub trait WindowRegistry {
    /// Resolve the next window declared on `surface`. Creates a descriptor,
    /// seeded from saved state or cascaded from the previous window, when
    /// the surface has none for this declaration.
    fn resolve_window(&mut self, surface: SurfaceId, name: &str, open: bool)
    -> Result<WindowHandle>;

    /// Drop every descriptor on `surface` beyond those declared this pass and
    /// rewind its declaration cursor.
    fn prune_surface(&mut self, surface: SurfaceId) -> Result<()>;
}

impl WindowRegistry for Context {
    fn resolve_window(
        &mut self,
        surface: SurfaceId,
        name: &str,
        open: bool,
    ) -> Result<WindowHandle> {
        let identity = self.config.identity;
        let surf = self.surfaces.require_mut(surface)?;
        let slot = surf.declare_index;
        let found = match identity {
            IdentityMode::Ordinal => slot < surf.windows.len(),
            IdentityMode::Named => {
                match surf.windows.iter().skip(slot).position(|w| w.name == name) {
                    Some(offset) => {
                        surf.windows.swap(slot, slot + offset);
                        true
                    }
                    None => false,
                }
            }
        };
        if found {
            match surf.windows.get(slot) {
                Some(w) if w.name != name => {
                    debug!(slot, declared = name, stored = %w.name, "slot reused by another name");
                }
                _ => {}
            }
        } else {
            let w = seed_window(self, name, slot, open);
            let surf = self.surfaces.require_mut(surface)?;
            let at = slot.min(surf.windows.len());
            surf.windows.insert(at, w);
        }

        let surf = self.surfaces.require_mut(surface)?;
        surf.declare_index += 1;
        self.last_resolved = surf.windows.get(slot).map(|w| w.rect);
        Ok(WindowHandle::new(surface, slot))
    }

    fn prune_surface(&mut self, surface: SurfaceId) -> Result<()> {
        let surf = self.surfaces.require_mut(surface)?;
        if surf.windows.len() > surf.declare_index {
            debug!(
                surface = %surf.name,
                dropped = surf.windows.len() - surf.declare_index,
                "pruning undeclared windows"
            );
            surf.windows.truncate(surf.declare_index);
        }
        surf.declare_index = 0;
        Ok(())
    }
}

/// Build a descriptor for a window seen for the first time.
fn seed_window(ctx: &mut Context, name: &str, slot: usize, open: bool) -> WindowDescriptor {
    let cfg = &ctx.config;
    let (rect, content_active) = match ctx.store.as_mut().and_then(|s| s.take(name)) {
        Some(saved) => saved,
        None => {
            let base = ctx.last_resolved.unwrap_or_default();
            let size = cfg.default_window_size();
            let rect = Rect::new(
                base.x() + cfg.cascade_offset,
                base.y() + cfg.cascade_offset,
                size.w,
                size.h,
            );
            (rect, true)
        }
    };
    let depth = if ctx.first_resolved {
        u32::try_from(slot + 1).unwrap_or(u32::MAX)
    } else {
        0
    };
    let serial = ctx.next_serial;
    let mut w = WindowDescriptor::new(
        name,
        serial,
        rect,
        cfg.header_height,
        depth,
        content_active,
        open,
    );
    w.place(rect, cfg.header_height, cfg.resize_handle);
    ctx.first_resolved = true;
    ctx.next_serial += 1;
    debug!(window = name, slot, depth, x = rect.x(), y = rect.y(), "window created");
    w
}
