//! The core raycasting renderer: a camera over a block board, a per-column
//! DDA wall pass feeding a framebuffer and depth cache, and billboard
//! sprite compositing against that depth cache.
#![forbid(unsafe_code)]

pub mod camera;
pub mod cast;
pub mod sprite;

pub use camera::{Camera, FrameSplit, FrameView};
pub use cast::{WallHit, cast_wall, render_column};
pub use sprite::Sprite;
