//! Rendering module
//!
//! The scene is painted through the [`RenderSurface`] trait so the frame
//! driver can be exercised without a browser. The browser implementation
//! draws onto a 2D canvas context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::{advance_road, draw_bubble, draw_explosion, draw_scene, draw_start_screen};

use glam::Vec2;

use crate::sim::{ObstacleSkin, Rect};

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    PlayerCar,
    Road,
    Background,
    Sun,
    Explosion,
    /// Speech bubble backdrop
    Flash,
    Obstacle(ObstacleSkin),
}

impl Sprite {
    pub const ALL: [Sprite; 9] = [
        Sprite::PlayerCar,
        Sprite::Road,
        Sprite::Background,
        Sprite::Sun,
        Sprite::Explosion,
        Sprite::Flash,
        Sprite::Obstacle(ObstacleSkin::Enemy1),
        Sprite::Obstacle(ObstacleSkin::Enemy2),
        Sprite::Obstacle(ObstacleSkin::Enemy3),
    ];

    /// Asset path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::PlayerCar => "assets/player-car.png",
            Sprite::Road => "assets/road.png",
            Sprite::Background => "assets/background.png",
            Sprite::Sun => "assets/sun.png",
            Sprite::Explosion => "assets/explosion.png",
            Sprite::Flash => "assets/flash.png",
            Sprite::Obstacle(ObstacleSkin::Enemy1) => "assets/enemy1.png",
            Sprite::Obstacle(ObstacleSkin::Enemy2) => "assets/enemy2.png",
            Sprite::Obstacle(ObstacleSkin::Enemy3) => "assets/enemy3.png",
        }
    }
}

/// Horizontal anchor for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// Font, fill color and alignment for a text draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: &'static str,
    pub color: &'static str,
    pub align: TextAlign,
}

/// Render collaborator contract
pub trait RenderSurface {
    /// Canvas dimensions (fixed for the session)
    fn size(&self) -> (f32, f32);
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn draw_image(&mut self, sprite: Sprite, rect: Rect);
    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sprite_paths_are_unique() {
        let paths: HashSet<_> = Sprite::ALL.iter().map(|s| s.path()).collect();
        assert_eq!(paths.len(), Sprite::ALL.len());
    }

    #[test]
    fn test_every_skin_has_a_sprite() {
        for skin in ObstacleSkin::ALL {
            assert!(Sprite::ALL.contains(&Sprite::Obstacle(skin)));
        }
    }
}
