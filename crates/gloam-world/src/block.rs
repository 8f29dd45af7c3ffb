//! Cube cells: six direction-indexed optional face textures.

use std::sync::Arc;

use gloam_geom::Direction;

use crate::texture::Texture;

/// A board cell's face set. An absent face is transparent: rays pass
/// through it and sprites show behind it. Blocks are shared between many
/// cells via `Arc`, never duplicated per cell.
#[derive(Clone, Debug, Default)]
pub struct Block {
    faces: [Option<Arc<Texture>>; 6],
}

impl Block {
    /// A block from explicit faces, indexed by [`Direction`].
    pub fn new(faces: [Option<Arc<Texture>>; 6]) -> Block {
        Block { faces }
    }

    /// The fully transparent block: no faces at all.
    pub fn empty() -> Block {
        Block::default()
    }

    /// All six faces showing the same texture.
    pub fn solid(texture: Arc<Texture>) -> Block {
        let f = || Some(texture.clone());
        Block {
            faces: [f(), f(), f(), f(), f(), f()],
        }
    }

    /// Four lateral walls, open above and below.
    pub fn walls(texture: Arc<Texture>) -> Block {
        let f = || Some(texture.clone());
        Block {
            faces: [f(), f(), f(), f(), None, None],
        }
    }

    /// An open cell with a ceiling and floor only.
    pub fn room(up: Arc<Texture>, down: Arc<Texture>) -> Block {
        Block {
            faces: [None, None, None, None, Some(up), Some(down)],
        }
    }

    /// The texture on one face, if that face exists.
    #[inline]
    pub fn face(&self, dir: Direction) -> Option<&Texture> {
        self.faces[dir.index()].as_deref()
    }

    /// Replaces one face.
    pub fn set_face(&mut self, dir: Direction, texture: Option<Arc<Texture>>) {
        self.faces[dir.index()] = texture;
    }
}
