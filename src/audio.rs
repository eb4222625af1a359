//! Audio system
//!
//! The simulation never calls into audio directly; the frame driver maps
//! events onto an [`AudioSink`]. In the browser the sink is backed by
//! `HtmlAudioElement`s; playback failures are swallowed and the game carries
//! on without the effect.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Looping engine drone, started with the game
    Engine,
    /// Player hit an obstacle
    Explosion,
    /// Obstacle passed the player
    Pass,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [Self::Engine, Self::Explosion, Self::Pass];

    /// Asset path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            SoundEffect::Engine => "assets/engine.mp3",
            SoundEffect::Explosion => "assets/explosion.mp3",
            SoundEffect::Pass => "assets/pass.mp3",
        }
    }
}

/// Audio collaborator contract
pub trait AudioSink {
    /// Play a one-shot effect
    fn play(&mut self, effect: SoundEffect);
    /// Start an effect looping until the page is torn down
    fn start_loop(&mut self, effect: SoundEffect);
}

/// Sink that discards everything (native builds, headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _effect: SoundEffect) {}

    fn start_loop(&mut self, _effect: SoundEffect) {}
}

/// Combine master and sfx volume into a single gain (0.0 - 1.0)
pub fn effective_volume(master: f32, sfx: f32, muted: bool) -> f32 {
    if muted {
        0.0
    } else {
        (master * sfx).clamp(0.0, 1.0)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::collections::HashMap;

    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::HtmlAudioElement;

    use super::{AudioSink, SoundEffect, effective_volume};
    use crate::settings::Settings;

    /// Audio manager for the game
    pub struct AudioManager {
        clips: HashMap<SoundEffect, HtmlAudioElement>,
        volume: f32,
        /// Catch handler for rejected `play()` promises (autoplay policy, missing file)
        swallow: Closure<dyn FnMut(JsValue)>,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            let mut clips = HashMap::new();
            for effect in SoundEffect::ALL {
                match HtmlAudioElement::new_with_src(effect.path()) {
                    Ok(el) => {
                        clips.insert(effect, el);
                    }
                    Err(e) => log::warn!("Failed to create audio for {:?}: {:?}", effect, e),
                }
            }

            Self {
                clips,
                volume: effective_volume(
                    settings.master_volume,
                    settings.sfx_volume,
                    settings.muted,
                ),
                swallow: Closure::new(|_err: JsValue| {}),
            }
        }

        /// Re-read volumes, applying them to clips already playing
        pub fn apply_settings(&mut self, settings: &Settings) {
            self.volume =
                effective_volume(settings.master_volume, settings.sfx_volume, settings.muted);
            for el in self.clips.values() {
                el.set_volume(f64::from(self.volume));
            }
        }

        fn start(&self, effect: SoundEffect, looping: bool) {
            // Loops still start silently so unmuting brings them back
            if self.volume <= 0.0 && !looping {
                return;
            }
            let Some(el) = self.clips.get(&effect) else {
                return;
            };

            el.set_volume(f64::from(self.volume));
            el.set_loop(looping);
            if !looping {
                el.set_current_time(0.0);
            }
            if let Ok(promise) = el.play() {
                let _ = promise.catch(&self.swallow);
            }
        }
    }

    impl AudioSink for AudioManager {
        fn play(&mut self, effect: SoundEffect) {
            self.start(effect, false);
        }

        fn start_loop(&mut self, effect: SoundEffect) {
            self.start(effect, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_volume() {
        assert_eq!(effective_volume(0.8, 0.5, false), 0.4);
        assert_eq!(effective_volume(0.8, 1.0, true), 0.0);
        assert_eq!(effective_volume(2.0, 1.0, false), 1.0);
    }

    #[test]
    fn test_every_effect_has_an_asset() {
        for effect in SoundEffect::ALL {
            assert!(effect.path().starts_with("assets/"));
            assert!(effect.path().ends_with(".mp3"));
        }
    }
}
