//! Obstacle spawner
//!
//! Draws are taken from the injected RNG in a fixed order (roll, x, skin,
//! speed), each as an `f64` in [0, 1) scaled onto its range. Scripted RNGs can
//! therefore pin exact spawn parameters.

use rand::Rng;

use super::state::{GameState, ObstacleSkin};
use crate::consts::*;

/// Parameters of a freshly rolled obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnParams {
    pub x: f32,
    pub speed: f32,
    pub skin: ObstacleSkin,
}

/// Roll for a spawn this tick. Returns `None` most ticks.
pub fn roll_spawn<R: Rng>(rng: &mut R, canvas_width: f32) -> Option<SpawnParams> {
    if rng.random::<f64>() >= SPAWN_PROBABILITY {
        return None;
    }

    // Narrower-than-a-car canvases pin obstacles to the left edge
    let span = (canvas_width - OBSTACLE_WIDTH).max(0.0);
    let x = scale_below(rng.random::<f64>(), 0.0, span);
    let skin = ObstacleSkin::from_unit(rng.random::<f64>());
    let speed = scale_below(rng.random::<f64>(), OBSTACLE_MIN_SPEED, OBSTACLE_MAX_SPEED);

    Some(SpawnParams { x, speed, skin })
}

/// Map a unit draw onto [low, high). The `f32` cast can round the top draws
/// up to `high`, so the result is pinned to the largest `f32` below it.
fn scale_below(u: f64, low: f32, high: f32) -> f32 {
    if high <= low {
        return low;
    }
    let value = (f64::from(low) + u * f64::from(high - low)) as f32;
    value.min(largest_below(high)).max(low)
}

/// Largest `f32` strictly less than a positive finite `bound`
fn largest_below(bound: f32) -> f32 {
    f32::from_bits(bound.to_bits() - 1)
}

/// Run the spawner for one tick, inserting at most one obstacle just above the top edge.
/// Returns the new obstacle's ID if one spawned.
pub fn spawn_obstacles<R: Rng>(state: &mut GameState, rng: &mut R) -> Option<u32> {
    let params = roll_spawn(rng, state.canvas.x)?;
    let id = state.spawn_obstacle_at(params.x, -OBSTACLE_HEIGHT, params.speed, params.skin);
    log::trace!("spawned obstacle {} at x={:.1} speed={:.2}", id, params.x, params.speed);
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedRng, unit};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_no_spawn_above_probability() {
        let mut rng = ScriptedRng::new(&[unit(0.5)]);
        assert_eq!(roll_spawn(&mut rng, 1000.0), None);
    }

    #[test]
    fn test_exact_spawn_parameters() {
        // roll, x, skin, speed
        let mut rng = ScriptedRng::new(&[unit(0.0), unit(0.5), unit(0.5), unit(0.25)]);
        let params = roll_spawn(&mut rng, 1000.0).expect("roll of 0.0 always spawns");
        assert_eq!(params.x, 450.0);
        assert_eq!(params.skin, ObstacleSkin::Enemy2);
        assert_eq!(params.speed, 7.0);
    }

    #[test]
    fn test_spawned_obstacle_sits_above_canvas() {
        let mut state = GameState::new(1000.0, 800.0);
        let mut rng = ScriptedRng::new(&[unit(0.01), unit(0.0), unit(0.9), unit(0.0)]);
        let id = spawn_obstacles(&mut state, &mut rng).expect("should spawn");

        let obstacle = &state.obstacles[0];
        assert_eq!(obstacle.id, id);
        assert_eq!(obstacle.pos.x, 0.0);
        assert_eq!(obstacle.pos.y, -OBSTACLE_HEIGHT);
        assert_eq!(obstacle.speed, OBSTACLE_MIN_SPEED);
        assert_eq!(obstacle.skin, ObstacleSkin::Enemy3);
        assert!(!obstacle.passed);
    }

    #[test]
    fn test_spawn_ranges_hold_for_seeded_rng() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut spawned = 0;
        for _ in 0..20_000 {
            if let Some(p) = roll_spawn(&mut rng, 1000.0) {
                spawned += 1;
                assert!(p.x >= 0.0 && p.x < 900.0, "x out of range: {}", p.x);
                assert!(
                    p.speed >= OBSTACLE_MIN_SPEED && p.speed < OBSTACLE_MAX_SPEED,
                    "speed out of range: {}",
                    p.speed
                );
            }
        }
        // ~2% of 20k; loose bounds
        assert!((200..700).contains(&spawned), "spawn count {}", spawned);
    }

    #[test]
    fn test_top_draws_stay_below_range_end() {
        // roll, x, skin, speed; all-ones words are the largest possible draws
        let mut rng = ScriptedRng::new(&[0, u64::MAX, u64::MAX, u64::MAX]);
        let params = roll_spawn(&mut rng, 1000.0).expect("roll of 0.0 always spawns");
        assert!(params.x < 900.0, "x reached {}", params.x);
        assert!(params.x > 899.9);
        assert!(params.speed < OBSTACLE_MAX_SPEED, "speed reached {}", params.speed);
        assert!(params.speed > 9.99);
        assert_eq!(params.skin, ObstacleSkin::Enemy3);
    }

    #[test]
    fn test_largest_below() {
        assert!(largest_below(10.0) < 10.0);
        assert_eq!(largest_below(1.0), 1.0 - f32::EPSILON / 2.0);
    }

    #[test]
    fn test_narrow_canvas_pins_to_left_edge() {
        let mut rng = ScriptedRng::new(&[unit(0.0), unit(0.9), unit(0.0), unit(0.0)]);
        let params = roll_spawn(&mut rng, 50.0).expect("should spawn");
        assert_eq!(params.x, 0.0);
    }
}
