//! 2D canvas backend

use std::collections::HashMap;

use glam::Vec2;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::{RenderSurface, Sprite, TextStyle};
use crate::sim::Rect;

/// Render surface over a `CanvasRenderingContext2d` and its preloaded images
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: HashMap<Sprite, HtmlImageElement>,
    pub size: (u32, u32),
}

impl CanvasSurface {
    pub fn new(
        ctx: CanvasRenderingContext2d,
        images: HashMap<Sprite, HtmlImageElement>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            ctx,
            images,
            size: (width, height),
        }
    }
}

impl RenderSurface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.size.0 as f32, self.size.1 as f32)
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, f64::from(w), f64::from(h));
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            f64::from(rect.pos.x),
            f64::from(rect.pos.y),
            f64::from(rect.size.x),
            f64::from(rect.size.y),
        );
    }

    fn draw_image(&mut self, sprite: Sprite, rect: Rect) {
        // Images that failed to load are simply skipped
        let Some(img) = self.images.get(&sprite) else {
            return;
        };
        if !img.complete() || img.natural_width() == 0 {
            return;
        }
        let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            f64::from(rect.pos.x),
            f64::from(rect.pos.y),
            f64::from(rect.size.x),
            f64::from(rect.size.y),
        );
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.ctx.set_font(style.font);
        self.ctx.set_fill_style_str(style.color);
        self.ctx.set_text_align(style.align.as_str());
        let _ = self
            .ctx
            .fill_text(text, f64::from(pos.x), f64::from(pos.y));
    }
}
