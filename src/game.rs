//! Frame driver
//!
//! Owns everything that changes between frames: the simulation state, the
//! start gate, the key map, the RNG and the road scroll. One call to
//! [`Game::frame`] is one animation frame.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::{AudioSink, SoundEffect};
use crate::platform::KeyState;
use crate::renderer::{self, RenderSurface};
use crate::sim::{GameEvent, GamePhase, GameState, tick};

const COLLISION_BUBBLE_TEXT: &str = "DM Me";
/// Collision bubble sits this far above the wrecked obstacle
const COLLISION_BUBBLE_RISE: f32 = 30.0;

pub struct Game<R = Pcg32> {
    pub state: GameState,
    phase: GamePhase,
    keys: KeyState,
    rng: R,
    road_offset: f32,
    /// Draw speech bubbles (from settings)
    pub speech_bubbles: bool,
}

impl Game<Pcg32> {
    /// New session on a `width` x `height` canvas with a seeded RNG
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), width, height)
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(rng: R, width: f32, height: f32) -> Self {
        Self {
            state: GameState::new(width, height),
            phase: GamePhase::NotStarted,
            keys: KeyState::new(),
            rng,
            road_offset: 0.0,
            speech_bubbles: true,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Record a key press. The press that opens the start gate also starts
    /// the engine loop, so it must be called from inside the key event
    /// (browsers only allow playback after a user gesture).
    /// Returns true iff this press started the game.
    pub fn key_down<A: AudioSink + ?Sized>(&mut self, key: &str, audio: &mut A) -> bool {
        self.keys.key_down(key);
        if self.phase == GamePhase::NotStarted {
            self.phase = GamePhase::Started;
            audio.start_loop(SoundEffect::Engine);
            log::info!("Game started");
            return true;
        }
        false
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.key_up(key);
    }

    /// Run one animation frame: paint, step, then present the step's events.
    ///
    /// Before the first key press only the start prompt is painted and the
    /// simulation does not advance.
    pub fn frame<S, A>(&mut self, surface: &mut S, audio: &mut A) -> Vec<GameEvent>
    where
        S: RenderSurface + ?Sized,
        A: AudioSink + ?Sized,
    {
        surface.clear();

        if self.phase == GamePhase::NotStarted {
            renderer::draw_start_screen(surface);
            return Vec::new();
        }

        self.road_offset = renderer::advance_road(self.road_offset, self.state.canvas.y);
        renderer::draw_scene(surface, &self.state, self.road_offset, self.speech_bubbles);

        let input = self.keys.tick_input();
        let events = tick(&mut self.state, &input, &mut self.rng);
        self.present(&events, surface, audio);
        events
    }

    fn present<S, A>(&self, events: &[GameEvent], surface: &mut S, audio: &mut A)
    where
        S: RenderSurface + ?Sized,
        A: AudioSink + ?Sized,
    {
        for event in events {
            match *event {
                GameEvent::Pass { .. } => audio.play(SoundEffect::Pass),
                GameEvent::Collision { pos, .. } => {
                    audio.play(SoundEffect::Explosion);
                    renderer::draw_explosion(surface, pos);
                    if self.speech_bubbles {
                        renderer::draw_bubble(
                            surface,
                            pos - glam::Vec2::new(0.0, COLLISION_BUBBLE_RISE),
                            COLLISION_BUBBLE_TEXT,
                        );
                    }
                }
                GameEvent::Cleared { .. } => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Sprite;
    use crate::sim::ObstacleSkin;
    use crate::test_support::{DrawCall, RecordingAudio, RecordingSurface, ScriptedRng};

    fn quiet_game(width: f32, height: f32) -> Game<ScriptedRng> {
        Game::with_rng(ScriptedRng::never_spawn(), width, height)
    }

    #[test]
    fn test_no_step_before_first_key() {
        let mut game = quiet_game(1000.0, 300.0);
        let mut surface = RecordingSurface::new(1000.0, 300.0);
        let mut audio = RecordingAudio::default();

        for _ in 0..100 {
            let events = game.frame(&mut surface, &mut audio);
            assert!(events.is_empty());
        }

        assert_eq!(game.state.time_ticks, 0);
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert!(audio.played.is_empty());
        assert!(surface.calls.iter().all(|c| matches!(
            c,
            DrawCall::Clear | DrawCall::Fill(_) | DrawCall::Text(_)
        )));
        assert_eq!(surface.texts().len(), 100);
        assert!(surface.texts().iter().all(|t| *t == "Press any key to continue"));
    }

    #[test]
    fn test_first_key_starts_once() {
        let mut game = quiet_game(1000.0, 300.0);
        let mut audio = RecordingAudio::default();
        assert!(game.key_down("x", &mut audio));
        assert_eq!(game.phase(), GamePhase::Started);
        game.key_up("x");
        assert!(!game.key_down("ArrowLeft", &mut audio));
        assert_eq!(game.phase(), GamePhase::Started);
    }

    #[test]
    fn test_directional_key_also_opens_gate() {
        for key in ["a", "d", "ArrowLeft", "ArrowRight"] {
            let mut game = quiet_game(1000.0, 300.0);
            let mut audio = RecordingAudio::default();
            assert!(game.key_down(key, &mut audio), "{key} did not start");
            assert_eq!(game.phase(), GamePhase::Started);
        }
    }

    #[test]
    fn test_engine_loop_starts_with_the_game_only() {
        let mut game = quiet_game(1000.0, 300.0);
        let mut surface = RecordingSurface::new(1000.0, 300.0);
        let mut audio = RecordingAudio::default();

        game.frame(&mut surface, &mut audio);
        assert!(audio.looped.is_empty());

        game.key_down("Enter", &mut audio);
        for key in ["a", "d", "ArrowLeft", "Enter", "m"] {
            game.key_down(key, &mut audio);
            game.key_up(key);
            game.frame(&mut surface, &mut audio);
        }

        assert_eq!(audio.looped, vec![SoundEffect::Engine]);
        assert!(!audio.played.contains(&SoundEffect::Engine));
    }

    #[test]
    fn test_started_frame_steps_and_steers() {
        let mut game = quiet_game(1000.0, 300.0);
        let mut surface = RecordingSurface::new(1000.0, 300.0);
        let mut audio = RecordingAudio::default();

        game.key_down("d", &mut audio);
        game.frame(&mut surface, &mut audio);
        assert_eq!(game.state.time_ticks, 1);
        assert_eq!(game.state.player.pos.x, 460.0);
        assert_eq!(surface.count_sprite(Sprite::PlayerCar), 1);
    }

    #[test]
    fn test_collision_is_presented() {
        let mut game = quiet_game(1000.0, 300.0);
        game.state
            .spawn_obstacle_at(450.0, 0.0, 6.0, ObstacleSkin::Enemy2);
        let mut surface = RecordingSurface::new(1000.0, 300.0);
        let mut audio = RecordingAudio::default();

        game.key_down(" ", &mut audio);
        let events = game.frame(&mut surface, &mut audio);

        assert!(matches!(events[..], [GameEvent::Collision { .. }]));
        assert_eq!(audio.played, vec![SoundEffect::Explosion]);
        assert_eq!(surface.count_sprite(Sprite::Explosion), 1);
        assert!(surface.texts().contains(&"DM Me"));
    }

    #[test]
    fn test_pass_plays_sound_only() {
        let mut game = quiet_game(1000.0, 300.0);
        game.speech_bubbles = false;
        // Left lane, about to drop below the player's top edge (150)
        game.state
            .spawn_obstacle_at(0.0, 148.0, 6.0, ObstacleSkin::Enemy1);
        let mut surface = RecordingSurface::new(1000.0, 300.0);
        let mut audio = RecordingAudio::default();

        game.key_down("q", &mut audio);
        game.frame(&mut surface, &mut audio);

        assert_eq!(audio.played, vec![SoundEffect::Pass]);
        assert_eq!(surface.count_sprite(Sprite::Explosion), 0);
        assert_eq!(game.state.score, 0);
    }
}
