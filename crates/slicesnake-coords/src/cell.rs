//! Integer lattice cells inside the N×N×N board.

use glam::{IVec3, Vec3};

use crate::axis::{Axis, Direction};

/// Smallest board edge that fits the three-cell starting snake.
pub const MIN_BOARD_SIZE: u32 = 4;

/// Largest board edge. Keeps N³ cell scans cheap and every coordinate well inside `i32`.
pub const MAX_BOARD_SIZE: u32 = 128;

/// A lattice position. Valid cells have every component in `[0, N)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Component along `axis`.
    #[must_use]
    pub fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Copy of this cell with the `axis` component replaced.
    #[must_use]
    pub fn with(self, axis: Axis, value: i32) -> Self {
        let mut out = self;
        match axis {
            Axis::X => out.x = value,
            Axis::Y => out.y = value,
            Axis::Z => out.z = value,
        }
        out
    }

    /// The neighbouring cell one unit step along `dir`. May leave the board.
    #[must_use]
    pub fn step(self, dir: Direction) -> Self {
        self.with(dir.axis, self.get(dir.axis) + dir.step.as_i32())
    }

    /// True if every component lies in `[0, size)`.
    #[must_use]
    pub fn in_bounds(self, size: u32) -> bool {
        let n = size as i32;
        Axis::ALL.iter().all(|&a| (0..n).contains(&self.get(a)))
    }

    /// Centre of this cell in the normalized unit cube, `(c + 0.5) / N` per axis.
    #[must_use]
    pub fn unit_center(self, size: u32) -> Vec3 {
        (self.as_ivec3().as_vec3() + Vec3::splat(0.5)) / size as f32
    }

    #[must_use]
    pub fn as_ivec3(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

impl From<IVec3> for Cell {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// Every cell of an N×N×N board, z-major then y then x.
pub fn all_cells(size: u32) -> impl Iterator<Item = Cell> {
    let n = size as i32;
    (0..n).flat_map(move |z| (0..n).flat_map(move |y| (0..n).map(move |x| Cell::new(x, y, z))))
}
