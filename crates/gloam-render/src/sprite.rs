//! Billboard sprites: screen-space projection, per-column occlusion
//! against the wall pass, and distance-sorted batch compositing.

use std::cmp::Ordering;
use std::sync::Arc;

use gloam_geom::{Vec2, wrap_angle};
use gloam_world::{Pixel, Texture};

use crate::camera::Camera;

/// A camera-facing billboard, centered halfway between floor and ceiling.
#[derive(Clone, Debug)]
pub struct Sprite {
    /// World position on the board plane.
    pub pos: Vec2,
    /// World-space half-extents; 1.0 spans a full tile in that dimension.
    pub scale: Vec2,
    pub texture: Arc<Texture>,
    /// Texture value drawn as see-through, or `None` for a fully opaque
    /// sprite.
    pub transparent: Option<Pixel>,
}

impl Camera {
    /// Draws one sprite, occluded per column by the wall pass's depth
    /// cache. Other sprites are not considered: overlapping sprites are
    /// ordered correctly only by [`Camera::draw_sprites`].
    pub fn draw_sprite(&mut self, sprite: &Sprite) {
        let dist = (sprite.pos - self.pos).length();
        self.draw_sprite_at(sprite, dist);
    }

    /// Draws a batch of sprites farthest-first, so nearer sprites
    /// overpaint farther ones where they overlap.
    pub fn draw_sprites(&mut self, sprites: &[Sprite]) {
        let mut order = std::mem::take(&mut self.sprite_order);
        order.clear();
        order.extend(
            sprites
                .iter()
                .enumerate()
                .map(|(i, s)| ((s.pos - self.pos).length(), i)),
        );
        order.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        for &(dist, i) in &order {
            self.draw_sprite_at(&sprites[i], dist);
        }
        self.sprite_order = order;
    }

    fn draw_sprite_at(&mut self, sprite: &Sprite, dist: f64) {
        if dist == 0.0 {
            return;
        }
        let disp = sprite.pos - self.pos;
        let bearing = disp.y.atan2(disp.x);
        let ang_width = (sprite.scale.x / dist).atan() * 2.0;
        let diff = wrap_angle(bearing - self.facing);
        if diff.abs() > (self.fov.x + ang_width) / 2.0 {
            return;
        }
        let ang_height = (sprite.scale.y / dist).atan() * 2.0;
        let width_px = ang_width / self.fov.x * self.width as f64;
        let height_px = ang_height / self.fov.y * self.height as f64;
        // Centered on the sprite's angular offset; the origin may well sit
        // off-screen for sprites near the view edge.
        let start_x =
            ((self.width as f64 - width_px) / 2.0 - diff / self.fov.x * self.width as f64) as i64;
        let start_y = ((self.height as f64 - height_px) / 2.0) as i64;
        let tex_w = sprite.texture.width() as f64;
        let tex_h = sprite.texture.height() as f64;
        for x in 0..width_px.ceil() as i64 {
            let cx = start_x + x;
            if cx < 0 || cx >= self.width as i64 {
                continue;
            }
            let cx = cx as usize;
            // Occlusion is per column: at or behind the wall means hidden.
            if self.depth[cx] <= dist {
                continue;
            }
            let sx = (x as f64 / width_px * tex_w) as usize;
            for y in 0..height_px.ceil() as i64 {
                let cy = start_y + y;
                if cy < 0 || cy >= self.height as i64 {
                    continue;
                }
                let sy = (y as f64 / height_px * tex_h) as usize;
                let Some(p) = sprite.texture.get(sx, sy) else {
                    continue;
                };
                if sprite.transparent == Some(p) {
                    continue;
                }
                self.framebuffer[cx * self.height + cy as usize] = p;
            }
        }
    }
}
