//! Quarter-turn of the movement plane about the current direction of travel.

use slicesnake_coords::{Direction, PlaneAxes};

/// Result of turning the plane: the new plane and the (possibly repaired) directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneTurn {
    pub plane: PlaneAxes,
    pub direction: Direction,
    pub pending: Direction,
}

/// Rotate `plane` 90° about the axis of `direction`.
///
/// The in-plane axis that is *not* the travel axis is swapped for the old
/// normal. If `direction` has somehow left the plane, the plane is rebuilt
/// around `a` and both directions are forced onto `a`, keeping their step.
/// A pending turn that no longer lies in the new plane is discarded.
pub fn turn_plane(plane: PlaneAxes, direction: Direction, pending: Direction) -> PlaneTurn {
    let (a, b, n) = (plane.a(), plane.b(), plane.normal());

    let (plane, direction, mut pending) = if direction.axis == a {
        (PlaneAxes::new(a, n), direction, pending)
    } else if direction.axis == b {
        (PlaneAxes::new(n, b), direction, pending)
    } else {
        let forced = Direction::new(a, direction.step);
        (PlaneAxes::new(a, n), forced, forced)
    };

    if !plane.contains(pending.axis) {
        pending = direction;
    }

    PlaneTurn {
        plane,
        direction,
        pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicesnake_coords::{Axis, Sign};

    fn dir(axis: Axis, step: Sign) -> Direction {
        Direction::new(axis, step)
    }

    #[test]
    fn test_turn_about_a_swaps_b_for_normal() {
        let d = dir(Axis::X, Sign::Pos);
        let t = turn_plane(PlaneAxes::new(Axis::X, Axis::Y), d, d);
        assert_eq!(t.plane, PlaneAxes::new(Axis::X, Axis::Z));
        assert_eq!(t.plane.normal(), Axis::Y);
        assert_eq!(t.direction, d);
    }

    #[test]
    fn test_turn_about_b_swaps_a_for_normal() {
        let d = dir(Axis::Y, Sign::Neg);
        let before = PlaneAxes::new(Axis::X, Axis::Y);
        let t = turn_plane(before, d, d);
        assert_eq!(t.plane.a(), before.normal());
        assert_eq!(t.plane.b(), before.b());
        assert_eq!(t.plane.normal(), before.a());
    }

    #[test]
    fn test_repair_when_direction_left_plane() {
        let d = dir(Axis::Z, Sign::Neg);
        let t = turn_plane(PlaneAxes::new(Axis::X, Axis::Y), d, dir(Axis::Y, Sign::Pos));
        assert_eq!(t.plane, PlaneAxes::new(Axis::X, Axis::Z));
        assert_eq!(t.direction, dir(Axis::X, Sign::Neg));
        assert_eq!(t.pending, dir(Axis::X, Sign::Neg));
    }

    #[test]
    fn test_stale_pending_turn_is_discarded() {
        let d = dir(Axis::X, Sign::Pos);
        let pending = dir(Axis::Y, Sign::Pos);
        let t = turn_plane(PlaneAxes::new(Axis::X, Axis::Y), d, pending);
        assert_eq!(t.pending, d);
    }

    #[test]
    fn test_pending_turn_kept_when_still_in_plane() {
        let d = dir(Axis::Y, Sign::Pos);
        let pending = dir(Axis::Y, Sign::Neg);
        let t = turn_plane(PlaneAxes::new(Axis::X, Axis::Y), d, pending);
        assert_eq!(t.pending, pending);
    }

    #[test]
    fn test_double_turn_keeps_direction_in_plane() {
        for a in Axis::ALL {
            for b in Axis::ALL {
                if a == b {
                    continue;
                }
                for axis in [a, b] {
                    let d = dir(axis, Sign::Pos);
                    let once = turn_plane(PlaneAxes::new(a, b), d, d);
                    assert!(once.plane.contains(once.direction.axis));
                    let twice = turn_plane(once.plane, once.direction, once.pending);
                    assert!(twice.plane.contains(twice.direction.axis));
                    assert_eq!(twice.direction, d);
                }
            }
        }
    }
}
