//! Ethos Race - an arcade road-dodging game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, scoring)
//! - `game`: Frame driver and start gate
//! - `renderer`: Scene painting behind a render-surface trait
//! - `audio`: Sound effects behind an audio-sink trait
//! - `platform`: Keyboard state and browser asset loading
//! - `settings`: Player preferences

pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Player car size
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 150.0;
    /// Horizontal steering speed (pixels per tick)
    pub const PLAYER_SPEED: f32 = 10.0;

    /// Obstacle car size
    pub const OBSTACLE_WIDTH: f32 = 100.0;
    pub const OBSTACLE_HEIGHT: f32 = 150.0;
    /// Obstacle fall speed range (pixels per tick, max exclusive)
    pub const OBSTACLE_MIN_SPEED: f32 = 6.0;
    pub const OBSTACLE_MAX_SPEED: f32 = 10.0;

    /// Chance of spawning an obstacle on any given tick
    pub const SPAWN_PROBABILITY: f64 = 0.02;

    /// Road texture scroll (pixels per frame)
    pub const ROAD_SCROLL_SPEED: f32 = 10.0;
}
