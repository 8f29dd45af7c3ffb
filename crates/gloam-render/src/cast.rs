//! The wall caster: exact grid-line traversal plus per-row vertical
//! sampling of walls, floors, and ceilings.

use std::sync::Arc;

use gloam_geom::{Direction, Vec2, cell_coord, frac, rev_frac};
use gloam_world::{Board, Pixel};

use crate::camera::FrameView;

/// Shifts a ray just past a fully open boundary so the next traversal step
/// does not re-detect the same grid line.
const OPEN_BOUNDARY_NUDGE: f64 = 1e-4;

/// The first opaque wall face along a ray.
#[derive(Clone, Debug)]
pub struct WallHit {
    /// Where the ray met the face, exactly on a grid line.
    pub pos: Vec2,
    /// The face that was hit; always lateral, never `Up` or `Down`.
    pub face: Direction,
    /// The block owning that face.
    pub block: Arc<gloam_world::Block>,
}

/// Walks `origin + t * dir` to successive grid-line crossings until it
/// meets an opaque face, or `None` once it leaves the board.
///
/// At each crossing the exit face of the current cell is tested first. An
/// absent exit face with an absent matching neighbor face is a fully open
/// boundary: the ray is nudged across and traversal continues. An absent
/// exit face whose neighbor presents its near face is a glancing hit on
/// the inside of an opening, seen from the far side; the neighbor's face
/// is the result. A crossing that lands exactly on a grid corner takes the
/// north/south branch.
pub fn cast_wall(board: &Board, origin: Vec2, dir: Vec2) -> Option<WallHit> {
    let mut pos = origin;
    loop {
        let mut to_next = Vec2::new(f64::INFINITY, f64::INFINITY);
        let mut ew = Direction::West;
        let mut ns = Direction::North;
        if dir.x < 0.0 {
            to_next.x = -frac(pos.x);
        } else if dir.x > 0.0 {
            ew = Direction::East;
            to_next.x = rev_frac(pos.x);
        }
        if dir.y < 0.0 {
            to_next.y = -frac(pos.y);
        } else if dir.y > 0.0 {
            ns = Direction::South;
            to_next.y = rev_frac(pos.y);
        }
        let face = if to_next.x / dir.x < to_next.y / dir.y {
            pos.y += to_next.x / dir.x * dir.y;
            pos.x += to_next.x;
            ew
        } else {
            pos.x += to_next.y / dir.y * dir.x;
            pos.y += to_next.y;
            ns
        };
        let cx = cell_coord(pos.x, dir.x > 0.0);
        let cy = cell_coord(pos.y, dir.y > 0.0);
        let block = board.block_at(cx, cy)?;
        if block.face(face).is_some() {
            return Some(WallHit {
                pos,
                face,
                block: block.clone(),
            });
        }
        let (sx, sy) = face.step();
        let neighbor = board.block_at(cx + sx, cy + sy)?;
        let opposite = face.opposite();
        if neighbor.face(opposite).is_some() {
            return Some(WallHit {
                pos,
                face: opposite,
                block: neighbor.clone(),
            });
        }
        if face == ew {
            pos.x += OPEN_BOUNDARY_NUDGE.copysign(dir.x);
        } else {
            pos.y += OPEN_BOUNDARY_NUDGE.copysign(dir.y);
        }
    }
}

/// Renders screen column `x` into `pixels` (one entry per screen row) and
/// writes the column's wall distance to `depth`. A ray that escapes the
/// board fills the column with the empty pixel and an infinite depth.
pub fn render_column(view: &FrameView, board: &Board, x: usize, pixels: &mut [Pixel], depth: &mut f64) {
    let angle = view.facing + view.fov.x * (0.5 - x as f64 / view.width as f64);
    let dir = Vec2::from_angle(angle);
    let Some(hit) = cast_wall(board, view.pos, dir) else {
        pixels.fill(view.empty);
        *depth = f64::INFINITY;
        return;
    };
    let disp = hit.pos - view.pos;
    let dist = disp.length();
    *depth = dist;
    for (t, pixel) in pixels.iter_mut().enumerate() {
        let dist_y = view.tans[t] * dist + 0.5;
        *pixel = if dist_y > 0.0 && dist_y < 1.0 {
            wall_pixel(view, &hit, dist_y)
        } else {
            plane_pixel(view, board, disp, dist, dir, dist_y, view.tans[t])
        };
    }
}

/// Samples the hit wall face for one row. The horizontal coordinate runs
/// along the face with a mirrored convention per direction, so one
/// physical wall reads the same from both sides.
fn wall_pixel(view: &FrameView, hit: &WallHit, dist_y: f64) -> Pixel {
    let Some(texture) = hit.block.face(hit.face) else {
        return view.empty;
    };
    let across = match hit.face {
        Direction::South => frac(hit.pos.x),
        Direction::North => rev_frac(hit.pos.x),
        Direction::West => frac(hit.pos.y),
        Direction::East => rev_frac(hit.pos.y),
        // The caster only ever yields lateral faces.
        Direction::Up | Direction::Down => return view.empty,
    };
    let tx = (across * texture.width() as f64) as usize;
    let ty = (dist_y * texture.height() as f64) as usize;
    texture.get(tx, ty).unwrap_or(view.empty)
}

/// Samples the floor or ceiling for one row: projects the ray onto the
/// horizontal plane half a cell above or below eye level, then samples the
/// `Up` or `Down` face of whichever cell contains that point. Outside the
/// board, or with no texture on that face, the row is empty.
fn plane_pixel(
    view: &FrameView,
    board: &Board,
    disp: Vec2,
    dist: f64,
    dir: Vec2,
    dist_y: f64,
    tan_row: f64,
) -> Pixel {
    let plane_dist = 0.5 / tan_row.abs();
    let point = view.pos + disp / dist * plane_dist;
    let cx = cell_coord(point.x, dir.x > 0.0);
    let cy = cell_coord(point.y, dir.y > 0.0);
    let Some(block) = board.block_at(cx, cy) else {
        return view.empty;
    };
    let (face, tx_frac) = if dist_y >= 1.0 {
        (block.face(Direction::Up), rev_frac(point.x))
    } else {
        (block.face(Direction::Down), frac(point.x))
    };
    let Some(texture) = face else {
        return view.empty;
    };
    let tx = (tx_frac * texture.width() as f64) as usize;
    let ty = (frac(point.y) * texture.height() as f64) as usize;
    texture.get(tx, ty).unwrap_or(view.empty)
}
