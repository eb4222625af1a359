//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame
//! - Injected RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, boxes_collide};
pub use spawn::{SpawnParams, roll_spawn, spawn_obstacles};
pub use state::{GameEvent, GamePhase, GameState, Obstacle, ObstacleSkin, Player};
pub use tick::{TickInput, tick};
