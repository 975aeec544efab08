//! Wireframe minimap projection and guide geometry in the normalized unit cube.
//!
//! Points live in `[0, 1]^3`. [`project_to_screen`] recentres them on the cube
//! centroid, applies two fixed-axis rotations (X first, then Y applied to the
//! already-rotated point), and scales onto the caller's panel.

use glam::{Mat3, Vec2, Vec3};

use crate::axis::Axis;
use crate::cell::Cell;

/// Rotation angles (radians) of the minimap camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapRotation {
    /// Rotation about the fixed X axis, applied first.
    pub rot_x: f32,
    /// Rotation about the fixed Y axis, applied second.
    pub rot_y: f32,
}

impl Default for MinimapRotation {
    fn default() -> Self {
        Self {
            rot_x: -0.75,
            rot_y: 0.85,
        }
    }
}

impl MinimapRotation {
    /// Combined rotation matrix.
    #[must_use]
    pub fn matrix(self) -> Mat3 {
        Mat3::from_rotation_y(self.rot_y) * Mat3::from_rotation_x(self.rot_x)
    }
}

/// A projected point: screen position plus depth for painter's ordering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub pos: Vec2,
    pub depth: f32,
}

/// Project a unit-cube point onto the minimap panel.
#[must_use]
pub fn project_to_screen(
    point: Vec3,
    rotation: MinimapRotation,
    center: Vec2,
    scale: f32,
) -> ScreenPoint {
    let p = rotation.matrix() * (point - Vec3::splat(0.5));
    ScreenPoint {
        pos: center + Vec2::new(p.x, p.y) * scale,
        depth: p.z,
    }
}

/// Index of a unit-cube corner in [`cube_corners`].
const fn corner(x: usize, y: usize, z: usize) -> usize {
    (z * 2 + y) * 2 + x
}

/// Corners of the unit cube, x fastest then y then z.
#[must_use]
pub fn cube_corners() -> [Vec3; 8] {
    let mut out = [Vec3::ZERO; 8];
    for z in 0..2 {
        for y in 0..2 {
            for x in 0..2 {
                out[corner(x, y, z)] = Vec3::new(x as f32, y as f32, z as f32);
            }
        }
    }
    out
}

/// The 12 cube edges as index pairs into [`cube_corners`].
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (corner(0, 0, 0), corner(1, 0, 0)),
    (corner(0, 1, 0), corner(1, 1, 0)),
    (corner(0, 0, 1), corner(1, 0, 1)),
    (corner(0, 1, 1), corner(1, 1, 1)),
    (corner(0, 0, 0), corner(0, 1, 0)),
    (corner(1, 0, 0), corner(1, 1, 0)),
    (corner(0, 0, 1), corner(0, 1, 1)),
    (corner(1, 0, 1), corner(1, 1, 1)),
    (corner(0, 0, 0), corner(0, 0, 1)),
    (corner(1, 0, 0), corner(1, 0, 1)),
    (corner(0, 1, 0), corner(0, 1, 1)),
    (corner(1, 1, 0), corner(1, 1, 1)),
];

/// Quad spanning the whole cube perpendicular to `normal` at depth `t`.
#[must_use]
pub fn slice_quad(normal: Axis, t: f32) -> [Vec3; 4] {
    match normal {
        Axis::X => [
            Vec3::new(t, 0.0, 0.0),
            Vec3::new(t, 1.0, 0.0),
            Vec3::new(t, 1.0, 1.0),
            Vec3::new(t, 0.0, 1.0),
        ],
        Axis::Y => [
            Vec3::new(0.0, t, 0.0),
            Vec3::new(1.0, t, 0.0),
            Vec3::new(1.0, t, 1.0),
            Vec3::new(0.0, t, 1.0),
        ],
        Axis::Z => [
            Vec3::new(0.0, 0.0, t),
            Vec3::new(1.0, 0.0, t),
            Vec3::new(1.0, 1.0, t),
            Vec3::new(0.0, 1.0, t),
        ],
    }
}

/// Slice quad for the lattice layer `slice` of an N-board, through cell centres.
#[must_use]
pub fn slice_quad_for_layer(normal: Axis, slice: i32, size: u32) -> [Vec3; 4] {
    slice_quad(normal, (slice as f32 + 0.5) / size as f32)
}

/// Three axis-parallel segments crossing the cube through `cell`'s centre (X, Y, Z order).
#[must_use]
pub fn axis_lines_through(cell: Cell, size: u32) -> [(Vec3, Vec3); 3] {
    let c = cell.unit_center(size);
    Axis::ALL.map(|axis| {
        let mut start = c;
        let mut end = c;
        start[axis.index()] = 0.0;
        end[axis.index()] = 1.0;
        (start, end)
    })
}

/// Three axis-aligned guide planes through `cell`'s centre (X, Y, Z normal order).
#[must_use]
pub fn guide_planes_through(cell: Cell, size: u32) -> [[Vec3; 4]; 3] {
    let c = cell.unit_center(size);
    Axis::ALL.map(|axis| slice_quad(axis, c[axis.index()]))
}
