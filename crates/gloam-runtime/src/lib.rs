//! Parallel wall rendering on a fixed worker pool.
//!
//! The pool owns its threads and synchronization; the camera and board are
//! handed in by reference each frame. Columns are disjoint contiguous
//! slices of the camera's column-major framebuffer, so workers write
//! without overlapping while sharing the read-only board and textures.
#![forbid(unsafe_code)]

use gloam_render::{Camera, render_column};
use gloam_world::Board;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder, ThreadPoolBuildError};

/// A fixed pool of workers that splits each frame's wall pass into column
/// ranges. Dropping the pool joins its threads.
pub struct ColumnPool {
    pool: ThreadPool,
}

impl ColumnPool {
    /// A pool with `threads` workers; 0 picks the rayon default (one per
    /// available core).
    pub fn new(threads: usize) -> Result<ColumnPool, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("gloam-col-{i}"))
            .build()?;
        Ok(ColumnPool { pool })
    }

    /// A full wall pass, fanned out over the pool. Equivalent to
    /// [`Camera::draw_all_columns`] down to the last bit: each column runs
    /// the identical single-column render, only on another thread. Returns
    /// once every column is drawn, so the caller's sprite pass reads a
    /// fully populated depth cache.
    pub fn render_walls(&self, cam: &mut Camera, board: &Board) {
        cam.begin_frame();
        let split = cam.frame_split();
        let view = split.view;
        let column_len = split.column_len;
        self.pool.install(|| {
            split
                .pixels
                .par_chunks_mut(column_len)
                .zip(split.depth.par_iter_mut())
                .enumerate()
                .for_each(|(x, (column, depth))| {
                    render_column(&view, board, x, column, depth);
                });
        });
    }
}
