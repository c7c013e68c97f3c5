//! Geometry primitives used across tessera.
//!
//! Coordinates are screen-space `f32` values with the origin at the top left
//! and `y` growing downwards.

#![warn(missing_docs)]

/// Error types for geometry operations.
mod error;
/// Width/height size type.
mod expanse;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;

pub use error::{Error, Result};
pub use expanse::Expanse;
pub use point::Point;
pub use rect::Rect;
