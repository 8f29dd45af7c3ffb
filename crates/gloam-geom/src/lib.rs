//! Minimal geometry types for the renderer crates: planar vectors, cube-face
//! directions, and the angle/fraction helpers the grid caster is built on.
#![forbid(unsafe_code)]

use core::f64::consts::{PI, TAU};
use core::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, rhs: Vec2) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len > 0.0 { self / len } else { self }
    }

    /// Unit vector at `angle` radians, x east and y south on the board grid.
    #[inline]
    pub fn from_angle(angle: f64) -> Vec2 {
        Vec2::new(angle.cos(), angle.sin())
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

/// One face of a grid cube. North is negative y, east is positive x; `Up`
/// and `Down` are the ceiling and floor planes of a cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    North = 0,
    South = 1,
    West = 2,
    East = 3,
    Up = 4,
    Down = 5,
}

impl Direction {
    /// Returns the `[0..6)` index of this direction.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts an index `[0..6)` back into a `Direction` value.
    /// Falls back to `North` for out-of-range indices.
    #[inline]
    pub fn from_index(i: usize) -> Direction {
        match i {
            0 => Direction::North,
            1 => Direction::South,
            2 => Direction::West,
            3 => Direction::East,
            4 => Direction::Up,
            5 => Direction::Down,
            _ => Direction::North,
        }
    }

    /// The direction facing back at this one. `Up` and `Down` swap.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Lateral cell offset when stepping through this face. Vertical faces
    /// stay in place.
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::Up | Direction::Down => (0, 0),
        }
    }
}

/// Fractional part of `n` in `[0, 1)` for any sign of `n`.
#[inline]
pub fn frac(n: f64) -> f64 {
    n - n.floor()
}

/// Distance from `n` up to the next integer, in `[0, 1)`; the complement of
/// [`frac`] except at integers, where both are zero.
#[inline]
pub fn rev_frac(n: f64) -> f64 {
    n.ceil() - n
}

/// Resolves a boundary coordinate to a cell index. Plain `floor`, except
/// that landing exactly on an integer while moving in the positive
/// direction resolves to the cell before the boundary, so a ray sitting on
/// a grid line never skips ahead into the next cell.
#[inline]
pub fn cell_coord(c: f64, moving_positive: bool) -> i32 {
    let f = c.floor();
    if moving_positive && f == c && c != 0.0 {
        c as i32 - 1
    } else {
        f as i32
    }
}

/// Normalizes an angle into `[0, 2π)`.
#[inline]
pub fn normalize_angle(a: f64) -> f64 {
    a.rem_euclid(TAU)
}

/// Wraps an angle difference into `(-π, π]`.
#[inline]
pub fn wrap_angle(a: f64) -> f64 {
    let r = a.rem_euclid(TAU);
    if r > PI { r - TAU } else { r }
}
