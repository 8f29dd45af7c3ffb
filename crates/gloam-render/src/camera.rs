//! The viewpoint and its per-frame buffers.

use gloam_geom::{Vec2, normalize_angle};
use gloam_world::{Board, Pixel};

use crate::cast;

/// A view into the world: position, facing, field of view, and the buffers
/// a frame is rendered into.
///
/// The framebuffer is column-major: screen column `x` occupies the
/// contiguous range `[x * height, (x + 1) * height)`. That keeps every
/// column a disjoint slice, which is what lets a worker pool render column
/// ranges concurrently without touching each other's memory.
#[derive(Clone, Debug)]
pub struct Camera {
    pub(crate) pos: Vec2,
    pub(crate) facing: f64,
    pub(crate) fov: Vec2,
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) empty_pixel: Pixel,
    /// tan of each screen row's vertical angle from center; fixed at
    /// construction, independent of facing.
    pub(crate) tans: Vec<f64>,
    /// Nearest wall distance per column, rewritten by every wall pass and
    /// read by the sprite pass for occlusion.
    pub(crate) depth: Vec<f64>,
    pub(crate) framebuffer: Vec<Pixel>,
    /// Reusable (distance, index) scratch for sprite batch ordering; its
    /// capacity only grows across frames.
    pub(crate) sprite_order: Vec<(f64, usize)>,
}

/// The read-only per-frame state a column render needs: everything about
/// the camera except the buffers being written.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub(crate) pos: Vec2,
    pub(crate) facing: f64,
    pub(crate) fov: Vec2,
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) empty: Pixel,
    pub(crate) tans: &'a [f64],
}

/// A camera split for a wall pass: the shared [`FrameView`] plus the whole
/// framebuffer and depth cache as mutable slices. `pixels` holds `width`
/// consecutive columns of `column_len` pixels each, one per depth entry.
pub struct FrameSplit<'a> {
    pub view: FrameView<'a>,
    pub column_len: usize,
    pub pixels: &'a mut [Pixel],
    pub depth: &'a mut [f64],
}

impl Camera {
    /// A camera with the given field of view (radians) and view size in
    /// pixels. Precomputes the row tangent cache and zero-fills the
    /// framebuffer; the depth cache starts at infinity so nothing occludes
    /// sprites before the first wall pass.
    pub fn new(fov_x: f64, fov_y: f64, width: usize, height: usize) -> Camera {
        let tans = (0..height)
            .map(|y| (fov_y * (y as f64 / height as f64 - 0.5)).tan())
            .collect();
        log::debug!("new camera {width}x{height} fov=({fov_x:.3}, {fov_y:.3})");
        Camera {
            pos: Vec2::ZERO,
            facing: 0.0,
            fov: Vec2::new(fov_x, fov_y),
            width,
            height,
            empty_pixel: 0,
            tans,
            depth: vec![f64::INFINITY; width],
            framebuffer: vec![0; width * height],
            sprite_order: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// The facing angle in radians. Any value is accepted between frames;
    /// [`Camera::begin_frame`] folds it back into `[0, 2π)`.
    #[inline]
    pub fn facing(&self) -> f64 {
        self.facing
    }

    #[inline]
    pub fn set_facing(&mut self, facing: f64) {
        self.facing = facing;
    }

    #[inline]
    pub fn fov(&self) -> Vec2 {
        self.fov
    }

    /// The pixel written wherever a ray escapes the board or a floor or
    /// ceiling texture is absent.
    #[inline]
    pub fn empty_pixel(&self) -> Pixel {
        self.empty_pixel
    }

    #[inline]
    pub fn set_empty_pixel(&mut self, pixel: Pixel) {
        self.empty_pixel = pixel;
    }

    /// A rendered pixel, or `None` out of range. Valid after a wall pass.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x < self.width && y < self.height {
            Some(self.framebuffer[x * self.height + y])
        } else {
            None
        }
    }

    /// The whole framebuffer, column-major.
    #[inline]
    pub fn framebuffer(&self) -> &[Pixel] {
        &self.framebuffer
    }

    /// The nearest wall distance for a column, or `None` out of range.
    #[inline]
    pub fn depth_at(&self, x: usize) -> Option<f64> {
        self.depth.get(x).copied()
    }

    /// The whole per-column depth cache.
    #[inline]
    pub fn depth_cache(&self) -> &[f64] {
        &self.depth
    }

    /// Starts a frame: folds facing into `[0, 2π)` and resets the depth
    /// cache, so columns left undrawn this frame occlude nothing instead of
    /// replaying stale distances. Must precede any sprite drawing; the wall
    /// pass entry points that cover all columns call it themselves.
    pub fn begin_frame(&mut self) {
        self.facing = normalize_angle(self.facing);
        self.depth.fill(f64::INFINITY);
    }

    /// Splits the camera into the per-frame view and the writable buffers.
    /// Column `x` of `pixels` pairs with `depth[x]`.
    pub fn frame_split(&mut self) -> FrameSplit<'_> {
        let Camera {
            pos,
            facing,
            fov,
            width,
            height,
            empty_pixel,
            tans,
            depth,
            framebuffer,
            sprite_order: _,
        } = self;
        FrameSplit {
            view: FrameView {
                pos: *pos,
                facing: *facing,
                fov: *fov,
                width: *width,
                height: *height,
                empty: *empty_pixel,
                tans: tans.as_slice(),
            },
            column_len: (*height).max(1),
            pixels: framebuffer.as_mut_slice(),
            depth: depth.as_mut_slice(),
        }
    }

    /// Renders the walls, floor, and ceiling of one screen column and
    /// refreshes its depth-cache entry. Out-of-range columns are ignored.
    pub fn draw_column(&mut self, board: &Board, x: usize) {
        if x >= self.width || self.height == 0 {
            return;
        }
        let FrameSplit {
            view,
            column_len,
            pixels,
            depth,
        } = self.frame_split();
        let column = &mut pixels[x * column_len..(x + 1) * column_len];
        cast::render_column(&view, board, x, column, &mut depth[x]);
    }

    /// A full wall pass: begins the frame, then renders every column.
    pub fn draw_all_columns(&mut self, board: &Board) {
        self.begin_frame();
        for x in 0..self.width {
            self.draw_column(board, x);
        }
    }

    /// A full frame: wall pass, then the distance-sorted sprite batch.
    pub fn render(&mut self, board: &Board, sprites: &[crate::sprite::Sprite]) {
        self.draw_all_columns(board);
        self.draw_sprites(sprites);
    }
}
