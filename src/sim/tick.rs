//! Per-frame simulation tick
//!
//! One call advances the game by exactly one frame: steer, move obstacles,
//! resolve pass/collision/exit, then spawn.

use rand::Rng;

use super::collision::boxes_collide;
use super::spawn::spawn_obstacles;
use super::state::{GameEvent, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Steer left (a / ArrowLeft held)
    pub left: bool,
    /// Steer right (d / ArrowRight held)
    pub right: bool,
}

impl TickInput {
    /// Net horizontal direction: -1, 0 or 1
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Advance the game state by one frame and return what happened.
///
/// Each live obstacle ends in at most one terminal event per tick: a
/// collision removes it before the off-screen check runs. Pass events are
/// purely cosmetic and never touch the score; points only come from
/// obstacles leaving the bottom of the canvas.
pub fn tick<R: Rng>(state: &mut GameState, input: &TickInput, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // Steer and clamp
    let dx = input.direction() * state.player.speed;
    state.player.steer(dx, state.canvas.x);

    let player_rect = state.player.rect();
    let canvas_height = state.canvas.y;
    let mut cleared = 0u64;

    state.obstacles.retain_mut(|obstacle| {
        obstacle.pos.y += obstacle.speed;

        if !obstacle.passed && player_rect.top() < obstacle.pos.y {
            obstacle.passed = true;
            events.push(GameEvent::Pass {
                id: obstacle.id,
                pos: obstacle.pos,
            });
        }

        if boxes_collide(&player_rect, &obstacle.rect()) {
            log::debug!("collision with obstacle {} at {:?}", obstacle.id, obstacle.pos);
            events.push(GameEvent::Collision {
                id: obstacle.id,
                pos: obstacle.pos,
            });
            return false;
        }

        if obstacle.pos.y > canvas_height {
            cleared += 1;
            events.push(GameEvent::Cleared { id: obstacle.id });
            return false;
        }

        true
    });

    state.score += cleared;

    spawn_obstacles(state, rng);

    events
}
