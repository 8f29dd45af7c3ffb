//! World data for the raycaster: textures, blocks, the board grid, and TOML
//! scene loading.
#![forbid(unsafe_code)]

pub mod block;
pub mod board;
pub mod config;
pub mod texture;

pub use block::Block;
pub use board::Board;
pub use config::Scene;
pub use texture::{Pixel, Texture};
