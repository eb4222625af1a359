//! Scene painting
//!
//! Layer order, back to front: background, sun, road, obstacles, car, HUD.

use glam::Vec2;

use super::{RenderSurface, Sprite, TextAlign, TextStyle};
use crate::consts::*;
use crate::sim::{GameState, Rect};

const SUN_POS: Vec2 = Vec2::new(30.0, 30.0);
const SUN_SIZE: f32 = 100.0;
const EXPLOSION_SIZE: f32 = 100.0;
const BUBBLE_SIZE: Vec2 = Vec2::new(100.0, 50.0);

const PROMPT_TEXT: &str = "Press any key to continue";
const CAR_BUBBLE_TEXT: &str = "When code?";

const PROMPT_STYLE: TextStyle = TextStyle {
    font: "40px Arial",
    color: "white",
    align: TextAlign::Center,
};

const SCORE_STYLE: TextStyle = TextStyle {
    font: "20px Arial",
    color: "white",
    align: TextAlign::Left,
};

const BUBBLE_STYLE: TextStyle = TextStyle {
    font: "16px Arial",
    color: "black",
    align: TextAlign::Left,
};

/// Scroll the road by one frame; wraps to 0 once a full canvas height has passed
pub fn advance_road(offset: f32, canvas_height: f32) -> f32 {
    let next = offset + ROAD_SCROLL_SPEED;
    if next >= canvas_height { 0.0 } else { next }
}

/// Static "press any key" screen shown before the first input
pub fn draw_start_screen<S: RenderSurface + ?Sized>(surface: &mut S) {
    let (w, h) = surface.size();
    surface.fill_rect(Rect::new(0.0, 0.0, w, h), "black");
    surface.draw_text(PROMPT_TEXT, Vec2::new(w / 2.0, h / 2.0), &PROMPT_STYLE);
}

/// Paint the whole playfield for the current state
pub fn draw_scene<S: RenderSurface + ?Sized>(
    surface: &mut S,
    state: &GameState,
    road_offset: f32,
    speech_bubbles: bool,
) {
    let (w, h) = surface.size();

    surface.draw_image(Sprite::Background, Rect::new(0.0, 0.0, w, h));
    surface.draw_image(
        Sprite::Sun,
        Rect {
            pos: SUN_POS,
            size: Vec2::splat(SUN_SIZE),
        },
    );

    // Two stacked tiles make the scroll seamless
    surface.draw_image(Sprite::Road, Rect::new(0.0, road_offset - h, w, h));
    surface.draw_image(Sprite::Road, Rect::new(0.0, road_offset, w, h));

    for obstacle in &state.obstacles {
        surface.draw_image(Sprite::Obstacle(obstacle.skin), obstacle.rect());
    }

    let player = &state.player;
    surface.draw_image(Sprite::PlayerCar, player.rect());
    if speech_bubbles {
        draw_bubble(
            surface,
            player.pos + Vec2::new(10.0, -40.0),
            CAR_BUBBLE_TEXT,
        );
    }

    surface.draw_text(
        &format!("Score: {}", state.score),
        Vec2::new(20.0, h - 20.0),
        &SCORE_STYLE,
    );
}

/// Explosion sprite with its top-left corner at `pos`
pub fn draw_explosion<S: RenderSurface + ?Sized>(surface: &mut S, pos: Vec2) {
    surface.draw_image(
        Sprite::Explosion,
        Rect {
            pos,
            size: Vec2::splat(EXPLOSION_SIZE),
        },
    );
}

/// Speech bubble anchored at `pos`
pub fn draw_bubble<S: RenderSurface + ?Sized>(surface: &mut S, pos: Vec2, text: &str) {
    surface.draw_image(
        Sprite::Flash,
        Rect {
            pos: pos - Vec2::splat(10.0),
            size: BUBBLE_SIZE,
        },
    );
    surface.draw_text(text, pos + Vec2::new(5.0, 20.0), &BUBBLE_STYLE);
}
