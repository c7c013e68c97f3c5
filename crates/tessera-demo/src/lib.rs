//! Sample surfaces and a headless driver for tessera.

pub mod backend;
pub mod panels;
pub mod script;
