//! Lattice cell ⇄ 2D slice grid conversion.

use crate::axis::Sign;
use crate::cell::Cell;
use crate::plane::PlaneInfo;

fn orient(value: i32, sign: Sign, size: u32) -> i32 {
    match sign {
        Sign::Pos => value,
        Sign::Neg => size as i32 - 1 - value,
    }
}

/// Column/row `(i, j)` of `cell` on the slice grid described by `info`.
///
/// Only the in-plane coordinates are used; the caller decides whether the cell
/// is on the displayed slice (see [`PlaneInfo::on_slice`]).
#[must_use]
pub fn cell_to_slice(cell: Cell, info: &PlaneInfo) -> (i32, i32) {
    let i = orient(cell.get(info.u_axis), info.u_sign, info.size);
    let j = orient(cell.get(info.v_axis), info.v_sign, info.size);
    (i, j)
}

/// Inverse of [`cell_to_slice`] for cells on slice `info.slice`.
#[must_use]
pub fn slice_to_cell(i: i32, j: i32, info: &PlaneInfo) -> Cell {
    // `orient` is its own inverse.
    let u = orient(i, info.u_sign, info.size);
    let v = orient(j, info.v_sign, info.size);
    Cell::default()
        .with(info.normal, info.slice)
        .with(info.u_axis, u)
        .with(info.v_axis, v)
}

/// Offset from the head to a target, expressed in slice-screen terms.
///
/// `du`/`dv` are screen column/row deltas (sign flips applied); `dn` is the
/// raw world delta along the normal axis, i.e. how many slices away it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceOffset {
    pub du: i32,
    pub dv: i32,
    pub dn: i32,
}

impl SliceOffset {
    /// True when the target is directly above/below the head along the normal.
    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.du == 0 && self.dv == 0
    }
}

#[must_use]
pub fn slice_offset(head: Cell, target: Cell, info: &PlaneInfo) -> SliceOffset {
    let delta = |axis| target.get(axis) - head.get(axis);
    SliceOffset {
        du: delta(info.u_axis) * info.u_sign.as_i32(),
        dv: delta(info.v_axis) * info.v_sign.as_i32(),
        dn: delta(info.normal),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::axis::Axis;
    use crate::plane::{PlaneAxes, View};

    const N: u32 = 6;

    fn all_infos() -> Vec<PlaneInfo> {
        let mut out = Vec::new();
        for a in Axis::ALL {
            for b in Axis::ALL {
                if a == b {
                    continue;
                }
                for view in View::ALL {
                    out.push(PlaneInfo::derive(
                        PlaneAxes::new(a, b),
                        view,
                        Cell::new(1, 2, 3),
                        N,
                    ));
                }
            }
        }
        out
    }

    #[test]
    fn test_slice_projection_is_bijective() {
        for info in all_infos() {
            let mut seen = HashSet::new();
            for cell in crate::cell::all_cells(N).filter(|c| info.on_slice(*c)) {
                let (i, j) = cell_to_slice(cell, &info);
                assert!((0..N as i32).contains(&i) && (0..N as i32).contains(&j));
                assert!(seen.insert((i, j)), "duplicate screen cell for {info:?}");
                assert_eq!(slice_to_cell(i, j, &info), cell);
            }
            assert_eq!(seen.len(), (N * N) as usize);
        }
    }

    #[test]
    fn test_flipped_rows() {
        let info = PlaneInfo::derive(
            PlaneAxes::default(),
            View::new(Axis::Z, Sign::Neg),
            Cell::new(0, 0, 0),
            20,
        );
        assert_eq!(cell_to_slice(Cell::new(3, 0, 0), &info), (3, 19));
        assert_eq!(cell_to_slice(Cell::new(3, 19, 0), &info), (3, 0));
    }

    #[test]
    fn test_slice_offset() {
        let info = PlaneInfo::derive(
            PlaneAxes::default(),
            View::new(Axis::Z, Sign::Neg),
            Cell::new(5, 5, 5),
            20,
        );
        let off = slice_offset(Cell::new(5, 5, 5), Cell::new(7, 8, 2), &info);
        assert_eq!(off, SliceOffset { du: 2, dv: -3, dn: -3 });
        assert!(!off.is_stacked());
        assert!(slice_offset(Cell::new(5, 5, 5), Cell::new(5, 5, 9), &info).is_stacked());
    }
}
