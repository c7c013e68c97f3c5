//! Tunable constants.

use serde::{Deserialize, Serialize};

use crate::{error::Result, geom::Expanse};

/// How a surface's N-th declared window is matched to stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityMode {
    /// Reuse whatever descriptor occupies the declared slot. Names are only
    /// consulted the first time a slot is filled.
    #[default]
    Ordinal,
    /// Look the declared name up among the surface's remaining descriptors
    /// every frame, so conditional windows keep their own state.
    Named,
}

/// Core configuration. Every field has a default, so partial JSON documents
/// are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Height of a window header.
    pub header_height: f32,
    /// Side of the square resize handle.
    pub resize_handle: f32,
    /// Minimum window width and height.
    pub min_window_size: f32,
    /// Width of a window that has no stored state.
    pub default_window_width: f32,
    /// Height of a window that has no stored state.
    pub default_window_height: f32,
    /// Diagonal offset between successively created windows.
    pub cascade_offset: f32,
    /// Control width restored at every frame boundary.
    pub control_width: f32,
    /// Height of a control row.
    pub control_height: f32,
    /// Width of control labels.
    pub label_width: f32,
    /// Window identity strategy.
    pub identity: IdentityMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_height: 25.0,
            resize_handle: 20.0,
            min_window_size: 48.0,
            default_window_width: 300.0,
            default_window_height: 200.0,
            cascade_offset: 20.0,
            control_width: 140.0,
            control_height: 25.0,
            label_width: 50.0,
            identity: IdentityMode::Ordinal,
        }
    }
}

impl Config {
    /// Parse a configuration from JSON.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Size given to windows with no stored state.
    pub fn default_window_size(&self) -> Expanse {
        Expanse::new(self.default_window_width, self.default_window_height)
    }

    /// Minimum window size as an expanse.
    pub fn min_window_expanse(&self) -> Expanse {
        Expanse::new(self.min_window_size, self.min_window_size)
    }
}
