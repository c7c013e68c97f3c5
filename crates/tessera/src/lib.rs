//! Tessera: an immediate-mode window declaration layer.
//!
//! Callers declare windows and controls from scratch every frame. Tessera
//! reconciles those declarations with persistent per-window state, keeps a
//! single stacking order across any number of independent declaration
//! passes ("surfaces"), and turns pointer events into window moves and
//! resizes.
//!
//! # Quick Start
//!
//! - [`Gui`] - surfaces plus their declaration closures
//! - [`Ui`] - the declarative API used inside a pass
//! - [`Context`] - all shared state, usable directly with [`FrameLifecycle`]
//! - [`RenderBackend`] - the drawing and layout layer the host supplies

#![warn(missing_docs)]

pub use tessera_geom as geom;

pub mod config;
pub mod context;
pub mod depth;
pub mod error;
pub mod event;
pub mod focus;
pub mod frame;
pub mod gui;
pub mod hit;
pub mod id;
pub mod ids;
pub mod interaction;
pub mod numeric;
pub mod persist;
pub mod registry;
pub mod render;
pub mod style;
pub mod surface;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod ui;
pub mod window;

pub use config::{Config, IdentityMode};
pub use context::Context;
pub use depth::DepthManager;
pub use error::{Error, Result};
pub use event::{Action, Event, FrameInput, KeyCode};
pub use frame::FrameLifecycle;
pub use gui::Gui;
pub use hit::HitTest;
pub use id::{ControlId, SurfaceId, WindowHandle};
pub use persist::{PersistedWindow, WindowStore};
pub use registry::WindowRegistry;
pub use render::{CursorIcon, RenderBackend};
pub use style::{Color, Skin, Style};
pub use ui::{Ui, WindowResponse};
pub use window::WindowDescriptor;
