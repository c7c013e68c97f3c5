//! Helpers for exercising surfaces without a real renderer.

pub mod backend;
pub mod harness;

pub use backend::{Op, ScriptBackend};
pub use harness::{Harness, HarnessBuilder};
