//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key state)
//! - Asset preloading (browser only)

#[cfg(target_arch = "wasm32")]
pub mod assets;
pub mod input;

pub use input::KeyState;
