//! Shared fakes for unit and integration tests

use std::collections::VecDeque;

use rand::RngCore;

use crate::audio::{AudioSink, SoundEffect};
use crate::renderer::{RenderSurface, Sprite, TextStyle};
use crate::sim::Rect;

/// Raw `u64` that `Rng::random::<f64>()` maps to exactly `u` (for dyadic `u`)
pub fn unit(u: f64) -> u64 {
    ((u * (1u64 << 53) as f64) as u64) << 11
}

/// RNG replaying a fixed script of `u64` words, then `u64::MAX` forever
/// (which never passes the spawn roll).
pub struct ScriptedRng {
    words: VecDeque<u64>,
}

impl ScriptedRng {
    pub fn new(words: &[u64]) -> Self {
        Self {
            words: words.iter().copied().collect(),
        }
    }

    pub fn never_spawn() -> Self {
        Self::new(&[])
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.words.pop_front().unwrap_or(u64::MAX)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Fill(Rect),
    Image(Sprite, Rect),
    Text(String),
}

/// Render surface that records calls instead of drawing
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count_sprite(&self, sprite: Sprite) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Image(s, _) if *s == sprite))
            .count()
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, _color: &str) {
        self.calls.push(DrawCall::Fill(rect));
    }

    fn draw_image(&mut self, sprite: Sprite, rect: Rect) {
        self.calls.push(DrawCall::Image(sprite, rect));
    }

    fn draw_text(&mut self, text: &str, _pos: glam::Vec2, _style: &TextStyle) {
        self.calls.push(DrawCall::Text(text.to_string()));
    }
}

/// Audio sink that records what would have played
#[derive(Default)]
pub struct RecordingAudio {
    pub played: Vec<SoundEffect>,
    pub looped: Vec<SoundEffect>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }

    fn start_loop(&mut self, effect: SoundEffect) {
        self.looped.push(effect);
    }
}
