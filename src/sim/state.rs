//! Game state and core simulation types
//!
//! Everything the step function reads or writes lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Game-start gate. `Started` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Showing the start prompt, simulation frozen
    #[default]
    NotStarted,
    /// Active gameplay
    Started,
}

/// Obstacle sprite palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleSkin {
    Enemy1,
    Enemy2,
    Enemy3,
}

impl ObstacleSkin {
    /// The fixed palette, in spawn-draw order
    pub const ALL: [ObstacleSkin; 3] = [Self::Enemy1, Self::Enemy2, Self::Enemy3];

    /// Pick a skin from a uniform draw in [0, 1)
    pub fn from_unit(u: f64) -> Self {
        let idx = (u * Self::ALL.len() as f64) as usize;
        Self::ALL[idx.min(Self::ALL.len() - 1)]
    }
}

/// The player's car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal distance covered per tick while a direction is held
    pub speed: f32,
}

impl Player {
    /// Centered horizontally, resting on the bottom edge
    pub fn new(canvas: Vec2) -> Self {
        Self {
            pos: Vec2::new(
                canvas.x / 2.0 - PLAYER_WIDTH / 2.0,
                canvas.y - PLAYER_HEIGHT,
            ),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: PLAYER_SPEED,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Move horizontally by `dx`, staying inside [0, canvas_width - width]
    pub fn steer(&mut self, dx: f32, canvas_width: f32) {
        let max_x = (canvas_width - self.size.x).max(0.0);
        self.pos.x = (self.pos.x + dx).clamp(0.0, max_x);
    }
}

/// A downward-moving car the player must avoid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Downward distance covered per tick
    pub speed: f32,
    pub skin: ObstacleSkin,
    /// Set once the obstacle has moved below the player's top edge
    pub passed: bool,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Discrete outcomes of a single tick, consumed by presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Obstacle moved below the player's top edge (cosmetic, never scores)
    Pass { id: u32, pos: Vec2 },
    /// Obstacle hit the player and was removed
    Collision { id: u32, pos: Vec2 },
    /// Obstacle left the bottom of the canvas and scored a point
    Cleared { id: u32 },
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Canvas dimensions, fixed for the session
    pub canvas: Vec2,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        let canvas = Vec2::new(canvas_width, canvas_height);
        Self {
            canvas,
            player: Player::new(canvas),
            obstacles: Vec::new(),
            score: 0,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert an obstacle at an explicit position, bypassing the random spawner
    pub fn spawn_obstacle_at(&mut self, x: f32, y: f32, speed: f32, skin: ObstacleSkin) -> u32 {
        let id = self.next_entity_id();
        self.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(x, y),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            speed,
            skin,
            passed: false,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(1000.0, 800.0);
        assert_eq!(state.player.pos, Vec2::new(450.0, 650.0));
        assert_eq!(state.player.size, Vec2::new(100.0, 150.0));
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_steer_clamps_to_canvas() {
        let mut player = Player::new(Vec2::new(1000.0, 800.0));
        player.steer(-10_000.0, 1000.0);
        assert_eq!(player.pos.x, 0.0);
        player.steer(10_000.0, 1000.0);
        assert_eq!(player.pos.x, 900.0);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = GameState::new(1000.0, 800.0);
        let a = state.spawn_obstacle_at(0.0, -150.0, 6.0, ObstacleSkin::Enemy1);
        let b = state.spawn_obstacle_at(0.0, -150.0, 6.0, ObstacleSkin::Enemy1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_skin_from_unit_covers_palette() {
        assert_eq!(ObstacleSkin::from_unit(0.0), ObstacleSkin::Enemy1);
        assert_eq!(ObstacleSkin::from_unit(0.34), ObstacleSkin::Enemy2);
        assert_eq!(ObstacleSkin::from_unit(0.99), ObstacleSkin::Enemy3);
    }
}
