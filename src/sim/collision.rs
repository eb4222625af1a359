//! Axis-aligned bounding box collision
//!
//! Every entity in the game is an upright sprite, so collision is a plain
//! rectangle overlap test in screen space (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap on both axes. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Returns true iff the player's and the obstacle's bounding boxes overlap
#[inline]
pub fn boxes_collide(player: &Rect, obstacle: &Rect) -> bool {
    player.overlaps(obstacle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_detected() {
        let player = Rect::new(450.0, 150.0, 100.0, 150.0);
        let obstacle = Rect::new(500.0, 100.0, 100.0, 150.0);
        assert!(boxes_collide(&player, &obstacle));
        assert!(boxes_collide(&obstacle, &player));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let player = Rect::new(450.0, 150.0, 100.0, 150.0);

        // Directly above, bottom edge on the player's top edge
        let above = Rect::new(450.0, 0.0, 100.0, 150.0);
        assert!(!boxes_collide(&player, &above));

        // Side by side
        let beside = Rect::new(550.0, 150.0, 100.0, 150.0);
        assert!(!boxes_collide(&player, &beside));
        let other_side = Rect::new(350.0, 150.0, 100.0, 150.0);
        assert!(!boxes_collide(&player, &other_side));
    }

    #[test]
    fn test_single_axis_overlap_is_not_enough() {
        let player = Rect::new(0.0, 150.0, 100.0, 150.0);
        // Same column, far above
        assert!(!boxes_collide(&player, &Rect::new(0.0, -400.0, 100.0, 150.0)));
        // Same row, far right
        assert!(!boxes_collide(&player, &Rect::new(600.0, 150.0, 100.0, 150.0)));
    }

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, -150.0, 100.0, 150.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.top(), -150.0);
        assert_eq!(r.bottom(), 0.0);
    }
}
