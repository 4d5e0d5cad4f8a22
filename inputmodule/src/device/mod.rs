// inputmodule/src/device/mod.rs
//! High-level device handle and canned matrix animations.

pub mod animations;
pub mod handle;

pub use handle::InputModule;
