//! TOML scene files: named ASCII-art textures, block face sets, and a
//! legend-keyed board layout.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use gloam_geom::Direction;
use serde::Deserialize;

use crate::block::Block;
use crate::board::Board;
use crate::texture::Texture;

/// A fully built scene: the board plus its textures and blocks by name, so
/// callers can animate texture contents or reuse blocks for sprites.
#[derive(Clone, Debug)]
pub struct Scene {
    pub board: Board,
    pub textures: HashMap<String, Arc<Texture>>,
    pub blocks: HashMap<String, Arc<Block>>,
}

impl Scene {
    pub fn from_toml_str(toml_str: &str) -> Result<Scene, Box<dyn Error>> {
        let cfg: SceneConfig = toml::from_str(toml_str)?;
        cfg.build()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Scene, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Scene::from_toml_str(&s)
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct SceneConfig {
    /// Texture name -> equal-length row strings; each byte is one pixel.
    pub textures: HashMap<String, Vec<String>>,
    /// Block name -> per-face texture names; absent faces are transparent.
    #[serde(default)]
    pub blocks: HashMap<String, BlockDef>,
    pub board: BoardConfig,
}

#[derive(Default, Deserialize)]
pub struct BlockDef {
    pub north: Option<String>,
    pub south: Option<String>,
    pub west: Option<String>,
    pub east: Option<String>,
    pub up: Option<String>,
    pub down: Option<String>,
}

#[derive(Deserialize)]
pub struct BoardConfig {
    /// Cell rows, top (north) first; every character is one cell.
    pub rows: Vec<String>,
    /// Cell character -> block name. Unlisted characters are an error.
    pub legend: HashMap<String, String>,
}

impl SceneConfig {
    pub fn build(self) -> Result<Scene, Box<dyn Error>> {
        let mut textures: HashMap<String, Arc<Texture>> = HashMap::new();
        // HashMap iteration order is nondeterministic; sort keys so error
        // reporting and build order are stable.
        let mut texture_entries: Vec<(String, Vec<String>)> = self.textures.into_iter().collect();
        texture_entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, rows) in texture_entries {
            textures.insert(name.clone(), Arc::new(texture_from_rows(&name, &rows)?));
        }

        let mut blocks: HashMap<String, Arc<Block>> = HashMap::new();
        let mut block_entries: Vec<(String, BlockDef)> = self.blocks.into_iter().collect();
        block_entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, def) in block_entries {
            let mut block = Block::empty();
            let faces = [
                (Direction::North, &def.north),
                (Direction::South, &def.south),
                (Direction::West, &def.west),
                (Direction::East, &def.east),
                (Direction::Up, &def.up),
                (Direction::Down, &def.down),
            ];
            for (dir, face) in faces {
                if let Some(tex_name) = face {
                    let texture = textures.get(tex_name).ok_or_else(|| {
                        format!("block {name:?}: unknown texture {tex_name:?}")
                    })?;
                    block.set_face(dir, Some(texture.clone()));
                }
            }
            blocks.insert(name, Arc::new(block));
        }

        let mut legend: HashMap<char, Arc<Block>> = HashMap::new();
        for (key, block_name) in &self.board.legend {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(format!("legend key {key:?} must be a single character").into());
            };
            let block = blocks
                .get(block_name)
                .ok_or_else(|| format!("legend {key:?}: unknown block {block_name:?}"))?;
            legend.insert(c, block.clone());
        }

        let rows = &self.board.rows;
        if rows.is_empty() {
            return Err("board has no rows".into());
        }
        let width = rows[0].chars().count();
        if width == 0 {
            return Err("board rows are empty".into());
        }
        let mut board = Board::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(format!("board row {y} is not {width} cells wide").into());
            }
            for (x, c) in row.chars().enumerate() {
                let block = legend
                    .get(&c)
                    .ok_or_else(|| format!("board cell {c:?} at ({x}, {y}) is not in the legend"))?;
                board.set(x as i32, y as i32, block.clone());
            }
        }

        Ok(Scene {
            board,
            textures,
            blocks,
        })
    }
}

fn texture_from_rows(name: &str, rows: &[String]) -> Result<Texture, Box<dyn Error>> {
    if rows.is_empty() {
        return Err(format!("texture {name:?} has no rows").into());
    }
    let width = rows[0].len();
    if width == 0 {
        return Err(format!("texture {name:?} has empty rows").into());
    }
    let mut texture = Texture::new(width, rows.len());
    for (y, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(format!("texture {name:?} row {y} is not {width} pixels wide").into());
        }
        for (x, byte) in row.bytes().enumerate() {
            if let Some(p) = texture.get_mut(x, y) {
                *p = byte;
            }
        }
    }
    Ok(texture)
}
