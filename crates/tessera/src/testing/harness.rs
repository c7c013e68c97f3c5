//! A frame driver that feeds pointer and key events to a [`Gui`] through
//! a [`ScriptBackend`](super::backend::ScriptBackend).

use crate::{
    config::Config,
    context::Context,
    error::Result,
    event::{Action, Event, FrameInput, KeyCode},
    geom::{Expanse, Point},
    gui::Gui,
    id::{ControlId, SurfaceId},
    ui::Ui,
    window::WindowDescriptor,
};

use super::backend::ScriptBackend;

/// Drives a [`Gui`] frame by frame against a [`ScriptBackend`].
pub struct Harness {
    /// The GUI under test.
    pub gui: Gui,
    /// Backend receiving every frame's drawing.
    pub backend: ScriptBackend,
    /// Screen size reported to the core.
    pub viewport: Expanse,
    /// Current pointer position.
    pub pointer: Point,
    /// Control reported as focused.
    pub focused: Option<ControlId>,
}

/// Builder for a [`Harness`].
pub struct HarnessBuilder {
    /// Core configuration.
    config: Config,
    /// Screen size.
    size: Expanse,
}

impl HarnessBuilder {
    /// Set the screen size.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Expanse::new(width, height);
        self
    }

    /// Set the core configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Build the harness.
    pub fn build(self) -> Harness {
        Harness {
            gui: Gui::new(self.config),
            backend: ScriptBackend::new(),
            viewport: self.size,
            pointer: Point::zero(),
            focused: None,
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Harness {
    /// A harness builder with an 800x600 screen and default configuration.
    pub fn builder() -> HarnessBuilder {
        HarnessBuilder {
            config: Config::default(),
            size: Expanse::new(800.0, 600.0),
        }
    }

    /// Register a surface.
    pub fn add_surface<F>(&mut self, name: &str, declare: F) -> SurfaceId
    where
        F: FnMut(&mut Ui<'_>) -> Result<()> + 'static,
    {
        self.gui.add_surface(name, declare)
    }

    /// The shared context.
    pub fn context(&self) -> &Context {
        self.gui.context()
    }

    /// Look a window up by surface and name.
    pub fn window(&self, surface: SurfaceId, name: &str) -> Option<&WindowDescriptor> {
        let ctx = self.gui.context();
        ctx.find_window(surface, name).and_then(|h| ctx.window(h))
    }

    /// The input the next frame will see for `event`.
    pub fn input(&self, event: Event) -> FrameInput {
        FrameInput::new(self.viewport)
            .at(self.pointer)
            .with_event(event)
            .with_focus(self.focused)
    }

    /// Run one frame with `event`.
    pub fn send(&mut self, event: Event) -> Result<()> {
        let input = self.input(event);
        self.backend.clear();
        self.gui.frame(&input, &mut self.backend)
    }

    /// Run a frame with no event.
    pub fn frame(&mut self) -> Result<()> {
        self.send(Event::Other)
    }

    /// Press the pointer at `p`.
    pub fn pointer_down(&mut self, p: Point) -> Result<()> {
        self.pointer = p;
        self.send(Event::Pointer(Action::Down))
    }

    /// Drag the pointer to `p`.
    pub fn drag_to(&mut self, p: Point) -> Result<()> {
        self.pointer = p;
        self.send(Event::Pointer(Action::Drag))
    }

    /// Move the pointer to `p` without a button held.
    pub fn move_to(&mut self, p: Point) -> Result<()> {
        self.pointer = p;
        self.send(Event::Pointer(Action::Moved))
    }

    /// Release the pointer at `p`.
    pub fn pointer_up(&mut self, p: Point) -> Result<()> {
        self.pointer = p;
        self.send(Event::Pointer(Action::Up))
    }

    /// Press Enter.
    pub fn enter(&mut self) -> Result<()> {
        self.send(Event::Key(KeyCode::Enter))
    }

    /// Report `id` as focused from the next frame on.
    pub fn focus(&mut self, id: Option<ControlId>) {
        self.focused = id;
    }
}
