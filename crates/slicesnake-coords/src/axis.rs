//! Lattice axes, unit steps, and the four logical arrow inputs.

use serde::{Deserialize, Serialize};

/// One of the three orthogonal lattice axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Axis {
    /// The x axis.
    X = 0,
    /// The y axis.
    Y = 1,
    /// The z axis.
    Z = 2,
}

impl Axis {
    /// All three axes in canonical order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index (0=X, 1=Y, 2=Z), usable with `glam` vector indexing.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The unique axis orthogonal to both `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`: two equal axes do not span a plane.
    #[must_use]
    pub fn third(a: Axis, b: Axis) -> Axis {
        assert_ne!(a, b, "third axis is undefined for a repeated axis {a:?}");
        match (a, b) {
            (Axis::X, Axis::Y) | (Axis::Y, Axis::X) => Axis::Z,
            (Axis::X, Axis::Z) | (Axis::Z, Axis::X) => Axis::Y,
            _ => Axis::X,
        }
    }

    /// Single-letter label used in HUD text and logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Sign of a unit step or of a view orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// +1.
    Pos,
    /// -1.
    Neg,
}

impl Sign {
    /// The sign as `+1` or `-1`.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        match self {
            Sign::Pos => 1,
            Sign::Neg => -1,
        }
    }

    /// The other sign.
    #[must_use]
    pub fn flipped(self) -> Sign {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Product of two signs.
    #[must_use]
    pub fn times(self, other: Sign) -> Sign {
        if self == other { Sign::Pos } else { Sign::Neg }
    }

    fn symbol(self) -> char {
        match self {
            Sign::Pos => '+',
            Sign::Neg => '-',
        }
    }
}

/// A unit movement vector along one world axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    /// Axis of travel.
    pub axis: Axis,
    /// Which way along `axis`.
    pub step: Sign,
}

impl Direction {
    /// Creates a direction.
    #[must_use]
    pub const fn new(axis: Axis, step: Sign) -> Self {
        Self { axis, step }
    }

    /// Same axis, opposite step.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::new(self.axis, self.step.flipped())
    }

    /// True iff `other` points back along the same axis.
    #[must_use]
    pub fn is_reverse_of(self, other: Direction) -> bool {
        self.axis == other.axis && self.step != other.step
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.axis, self.step.symbol())
    }
}

/// Free-function form of [`Axis::third`].
#[must_use]
pub fn third_axis(a: Axis, b: Axis) -> Axis {
    Axis::third(a, b)
}

/// Free-function form of [`Direction::is_reverse_of`].
#[must_use]
pub fn is_reverse(d1: Direction, d2: Direction) -> bool {
    d1.is_reverse_of(d2)
}

/// Logical arrow input on the 2D slice view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Arrow {
    /// Towards smaller screen column.
    Left,
    /// Towards larger screen column.
    Right,
    /// Towards smaller screen row.
    Up,
    /// Towards larger screen row.
    Down,
}
