use std::{io, result::Result as StdResult};

use thiserror::Error;

use crate::{geom, id::SurfaceId};

/// Result type for tessera operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
///
/// Most variants signal a broken declaration sequence: they are contract
/// violations by the UI author and are returned immediately without any
/// attempt at partial recovery.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// `begin_window` was called while another window on the same surface is
    /// still open.
    #[error("begin_window called before the previous window was ended")]
    WindowAlreadyOpen,

    /// `end_window` was called with no open window.
    #[error("end_window called without a matching begin_window")]
    NoOpenWindow,

    /// A control was declared outside an open window.
    #[error("control declared outside a window")]
    ControlOutsideWindow,

    /// A surface pass finished while a window was still open.
    #[error("surface pass ended with window {0:?} still open")]
    UnclosedWindow(String),

    /// The active skin does not define a required style.
    #[error("missing style: {0}")]
    MissingStyle(String),

    /// The surface does not exist.
    #[error("unknown surface: {0:?}")]
    UnknownSurface(SurfaceId),

    /// A pass was started on a surface whose declaration callback is
    /// already executing.
    #[error("surface {0:?} is already running a declaration pass")]
    SurfaceBusy(SurfaceId),

    /// Geometry failure.
    #[error("geometry: {0}")]
    Geometry(String),

    /// Saving window state failed.
    #[error("persist: {0}")]
    Persist(String),

    /// Failure reported by the render collaborator.
    #[error("render: {0}")]
    Render(String),
}

impl From<geom::Error> for Error {
    fn from(e: geom::Error) -> Self {
        Self::Geometry(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Persist(e.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Persist(e.to_string())
    }
}
