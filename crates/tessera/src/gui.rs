//! Surfaces with registered declaration closures.

use slotmap::SecondaryMap;
use tracing::error;

use crate::{
    config::Config,
    context::Context,
    error::{Error, Result},
    event::FrameInput,
    frame::FrameLifecycle,
    id::SurfaceId,
    render::RenderBackend,
    ui::Ui,
};

/// A surface's declaration pass.
pub type Declare = Box<dyn FnMut(&mut Ui<'_>) -> Result<()>>;

/// A context plus one declaration closure per surface.
pub struct Gui {
    /// Shared state.
    ctx: Context,
    /// Declaration closures. A closure is taken out of its slot while it
    /// runs.
    passes: SecondaryMap<SurfaceId, Option<Declare>>,
}

impl Default for Gui {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Gui {
    /// A GUI with no surfaces.
    pub fn new(config: Config) -> Self {
        Self {
            ctx: Context::new(config),
            passes: SecondaryMap::new(),
        }
    }

    /// Wrap an existing context.
    pub fn with_context(ctx: Context) -> Self {
        Self {
            ctx,
            passes: SecondaryMap::new(),
        }
    }

    /// The shared context.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// The shared context, mutably.
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    /// Register a surface and its declaration closure.
    pub fn add_surface<F>(&mut self, name: &str, declare: F) -> SurfaceId
    where
        F: FnMut(&mut Ui<'_>) -> Result<()> + 'static,
    {
        let id = self.ctx.add_surface(name);
        self.passes.insert(id, Some(Box::new(declare)));
        id
    }

    /// Drop a surface, its closure and its windows.
    pub fn remove_surface(&mut self, id: SurfaceId) -> Result<()> {
        self.passes.remove(id);
        self.ctx
            .remove_surface(id)
            .map(|_| ())
            .ok_or(Error::UnknownSurface(id))
    }

    /// Enable or disable a surface.
    pub fn set_enabled(&mut self, id: SurfaceId, enabled: bool) -> Result<()> {
        self.ctx.set_surface_enabled(id, enabled)
    }

    /// Run one surface's pass. Hosts may drive surfaces individually and in
    /// any order; the frame ends when every enabled surface has run.
    pub fn run_surface(
        &mut self,
        id: SurfaceId,
        input: &FrameInput,
        backend: &mut dyn RenderBackend,
    ) -> Result<()> {
        let mut declare = self
            .passes
            .get_mut(id)
            .ok_or(Error::UnknownSurface(id))?
            .take()
            .ok_or(Error::SurfaceBusy(id))?;

        let result = match self.ctx.begin_pass(id, input) {
            Ok(()) => {
                let declared = declare(&mut Ui::new(&mut self.ctx, id, backend));
                let ended = self.ctx.end_pass(id);
                declared.and(ended)
            }
            Err(e) => Err(e),
        };

        if let Some(slot) = self.passes.get_mut(id) {
            *slot = Some(declare);
        }
        result
    }

    /// Run every enabled surface in registration order. Every surface runs
    /// even if an earlier one fails; the first error is returned.
    pub fn frame(&mut self, input: &FrameInput, backend: &mut dyn RenderBackend) -> Result<()> {
        let ids: Vec<SurfaceId> = self
            .ctx
            .surfaces()
            .iter()
            .filter(|(_, s)| s.is_enabled())
            .map(|(id, _)| id)
            .collect();
        let mut first = Ok(());
        for id in ids {
            if let Err(e) = self.run_surface(id, input, backend) {
                error!(surface = ?id, "surface pass failed: {e}");
                if first.is_ok() {
                    first = Err(e);
                }
            }
        }
        first
    }
}
