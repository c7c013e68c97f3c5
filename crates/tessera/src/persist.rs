//! Saved window placement.
//!
//! A store is loaded once per run and consulted the first time each window
//! name is declared. Every record can seed at most one window until the
//! store is written again.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{context::Context, error::Result, geom::Rect, window::WindowDescriptor};

/// Default for the non-serialized `ready` flag.
fn armed() -> bool {
    true
}

/// One saved window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedWindow {
    /// Window name.
    pub name: String,
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
    /// Content-active flag: true when the body was expanded.
    pub is_open: bool,
    /// Record can still seed a window.
    #[serde(skip, default = "armed")]
    ready: bool,
}

impl PersistedWindow {
    /// A ready record.
    pub fn new(name: &str, rect: Rect, is_open: bool) -> Self {
        Self {
            name: name.to_string(),
            x: rect.x(),
            y: rect.y(),
            width: rect.w,
            height: rect.h,
            is_open,
            ready: true,
        }
    }

    /// Can this record still seed a window?
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The saved rectangle, if it is usable.
    pub fn rect(&self) -> Result<Rect> {
        Ok(Rect::try_new(self.x, self.y, self.width, self.height)?)
    }

    /// Overwrite from a live descriptor and re-arm.
    fn update(&mut self, w: &WindowDescriptor) {
        *self = Self::new(&w.name, w.rect, w.content_active);
    }
}

/// A collection of saved windows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowStore {
    /// Saved windows, in first-saved order.
    #[serde(default)]
    pub windows: Vec<PersistedWindow>,
}

impl WindowStore {
    /// Parse a store from JSON.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serialize the store as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a store from disk. A missing or unreadable file is the normal
    /// first-run condition and yields an empty store.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                warn!(path = %path.display(), "no window store loaded: {e}");
                return Self::default();
            }
        };
        match Self::from_json(&text) {
            Ok(store) => {
                debug!(path = %path.display(), windows = store.windows.len(), "window store loaded");
                store
            }
            Err(e) => {
                warn!(path = %path.display(), "discarding unparsable window store: {e}");
                Self::default()
            }
        }
    }

    /// Write the store to disk.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Consume the first ready record named `name`, returning its rectangle
    /// and content-active flag. Records with unusable geometry are consumed
    /// and skipped.
    pub fn take(&mut self, name: &str) -> Option<(Rect, bool)> {
        for rec in self
            .windows
            .iter_mut()
            .filter(|r| r.ready && r.name == name)
        {
            rec.ready = false;
            match rec.rect() {
                Ok(rect) => return Some((rect, rec.is_open)),
                Err(e) => warn!(window = name, "skipping saved window: {e}"),
            }
        }
        None
    }

    /// Look a record up by name.
    pub fn get(&self, name: &str) -> Option<&PersistedWindow> {
        self.windows.iter().find(|r| r.name == name)
    }

    /// Record one live window, overwriting a record with the same name or
    /// appending a new one.
    pub fn record(&mut self, w: &WindowDescriptor) {
        match self.windows.iter_mut().find(|r| r.name == w.name) {
            Some(rec) => rec.update(w),
            None => self
                .windows
                .push(PersistedWindow::new(&w.name, w.rect, w.content_active)),
        }
    }

    /// Record every live window in a context.
    pub fn merge_from(&mut self, ctx: &Context) {
        for (_, w) in ctx.surfaces().windows() {
            self.record(w);
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// True when there are no records.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
