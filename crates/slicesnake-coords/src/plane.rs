//! Movement plane, view orientation, and the derived per-frame plane info.
//!
//! The plane is stored as two in-plane axes `(a, b)`. The normal axis, slice
//! index and u/v sign convention of the 2D slice view are derived on demand as
//! a [`PlaneInfo`].

use crate::axis::{Arrow, Axis, Direction, Sign};
use crate::cell::Cell;

/// The two axes spanning the current movement/viewing plane.
///
/// `a` is always the slice's u (column) axis and `b` the v (row) axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlaneAxes {
    a: Axis,
    b: Axis,
}

impl PlaneAxes {
    /// # Panics
    ///
    /// Panics if `a == b`.
    #[must_use]
    pub fn new(a: Axis, b: Axis) -> Self {
        assert_ne!(a, b, "plane axes must be distinct");
        Self { a, b }
    }

    /// Primary (u) axis.
    #[must_use]
    pub fn a(self) -> Axis {
        self.a
    }

    /// Secondary (v) axis.
    #[must_use]
    pub fn b(self) -> Axis {
        self.b
    }

    /// Axis perpendicular to the plane.
    #[must_use]
    pub fn normal(self) -> Axis {
        Axis::third(self.a, self.b)
    }

    #[must_use]
    pub fn contains(self, axis: Axis) -> bool {
        axis == self.a || axis == self.b
    }
}

impl Default for PlaneAxes {
    fn default() -> Self {
        Self::new(Axis::X, Axis::Y)
    }
}

impl std::fmt::Display for PlaneAxes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.a, self.b)
    }
}

/// Free-function form of [`PlaneAxes::contains`].
#[must_use]
pub fn axis_in_plane(axis: Axis, plane: PlaneAxes) -> bool {
    plane.contains(axis)
}

/// Which cube face is "front": a normal axis plus a sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct View {
    pub axis: Axis,
    pub sign: Sign,
}

impl View {
    /// The six selectable views, in cycling order.
    pub const ALL: [View; 6] = [
        View::new(Axis::Z, Sign::Pos),
        View::new(Axis::Z, Sign::Neg),
        View::new(Axis::X, Sign::Pos),
        View::new(Axis::X, Sign::Neg),
        View::new(Axis::Y, Sign::Pos),
        View::new(Axis::Y, Sign::Neg),
    ];

    pub const fn new(axis: Axis, sign: Sign) -> Self {
        Self { axis, sign }
    }

    /// Position of this view in [`View::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        View::ALL
            .iter()
            .position(|&v| v == self)
            .unwrap_or_default()
    }

    /// The view `offset` places away in [`View::ALL`], wrapping at both ends.
    #[must_use]
    pub fn cycled(self, offset: i32) -> View {
        let len = View::ALL.len() as i32;
        let idx = (self.index() as i32 + offset).rem_euclid(len);
        View::ALL[idx as usize]
    }

    /// The view whose axis is `axis`, keeping `prefer` if such an entry exists.
    #[must_use]
    pub fn for_axis(axis: Axis, prefer: Sign) -> View {
        View::ALL
            .iter()
            .copied()
            .find(|v| v.axis == axis && v.sign == prefer)
            .or_else(|| View::ALL.iter().copied().find(|v| v.axis == axis))
            .unwrap_or(View::ALL[0])
    }

    /// Human-readable label such as `+Z (XY)`.
    #[must_use]
    pub fn label(self) -> String {
        let plane = match self.axis {
            Axis::X => "YZ",
            Axis::Y => "XZ",
            Axis::Z => "XY",
        };
        let sign = match self.sign {
            Sign::Pos => '+',
            Sign::Neg => '-',
        };
        format!("{sign}{} ({plane})", self.axis)
    }
}

impl Default for View {
    fn default() -> Self {
        View::ALL[0]
    }
}

/// Everything the slice renderer needs to place cells on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaneInfo {
    /// Axis perpendicular to the slice.
    pub normal: Axis,
    /// The head's coordinate along `normal`: which slice is shown.
    pub slice: i32,
    /// Column axis.
    pub u_axis: Axis,
    /// Row axis.
    pub v_axis: Axis,
    /// Column orientation. Always [`Sign::Pos`]; only rows are ever flipped.
    pub u_sign: Sign,
    /// Row orientation, taken from the view sign.
    pub v_sign: Sign,
    /// Board edge length N.
    pub size: u32,
}

impl PlaneInfo {
    /// Derive plane info from the plane, the current view, and the snake head.
    #[must_use]
    pub fn derive(plane: PlaneAxes, view: View, head: Cell, size: u32) -> Self {
        let normal = plane.normal();
        Self {
            normal,
            slice: head.get(normal),
            u_axis: plane.a(),
            v_axis: plane.b(),
            u_sign: Sign::Pos,
            v_sign: view.sign,
            size,
        }
    }

    /// True if `cell` lies on the displayed slice.
    #[must_use]
    pub fn on_slice(&self, cell: Cell) -> bool {
        cell.get(self.normal) == self.slice
    }
}

/// Map an arrow press to the world direction it steers towards.
///
/// Left/right travel along u, up/down along v; up is towards negative v.
#[must_use]
pub fn arrow_to_world(arrow: Arrow, info: &PlaneInfo) -> Direction {
    match arrow {
        Arrow::Left => Direction::new(info.u_axis, info.u_sign.flipped()),
        Arrow::Right => Direction::new(info.u_axis, info.u_sign),
        Arrow::Up => Direction::new(info.v_axis, info.v_sign.flipped()),
        Arrow::Down => Direction::new(info.v_axis, info.v_sign),
    }
}

/// Screen-space heading `(du, dv)` of a world direction. Zero for the normal axis.
#[must_use]
pub fn world_to_screen_delta(dir: Direction, info: &PlaneInfo) -> (i32, i32) {
    if dir.axis == info.u_axis {
        (dir.step.times(info.u_sign).as_i32(), 0)
    } else if dir.axis == info.v_axis {
        (0, dir.step.times(info.v_sign).as_i32())
    } else {
        (0, 0)
    }
}
