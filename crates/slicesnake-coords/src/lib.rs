//! Lattice coordinates, movement planes, and projections for the slice-snake board.
//!
//! The board is an N×N×N lattice of [`Cell`]s. The player only ever sees one
//! axis-aligned slice of it, chosen by the current [`PlaneAxes`] and oriented by
//! a [`View`]. This crate holds the pure geometry behind that:
//!
//! - [`Axis`], [`Sign`] and [`Direction`] for unit movement along world axes,
//! - [`PlaneInfo`], derived from plane + view + head, for the 2D slice grid,
//! - [`cell_to_slice`] / [`slice_to_cell`] to move between cells and grid squares,
//! - [`project_to_screen`] and the guide geometry used by the wireframe minimap.
//!
//! ```rust
//! use slicesnake_coords::{Arrow, Axis, Cell, PlaneAxes, PlaneInfo, View, arrow_to_world, cell_to_slice};
//!
//! let info = PlaneInfo::derive(PlaneAxes::new(Axis::X, Axis::Y), View::default(), Cell::new(10, 10, 10), 20);
//! assert_eq!(info.normal, Axis::Z);
//! assert_eq!(cell_to_slice(Cell::new(3, 4, 10), &info), (3, 4));
//! assert_eq!(arrow_to_world(Arrow::Right, &info).axis, Axis::X);
//! ```

mod axis;
mod cell;
mod minimap;
mod plane;
mod projection;

pub use axis::{Arrow, Axis, Direction, Sign, is_reverse, third_axis};
pub use cell::{Cell, MAX_BOARD_SIZE, MIN_BOARD_SIZE, all_cells};
pub use minimap::{
    CUBE_EDGES, MinimapRotation, ScreenPoint, axis_lines_through, cube_corners,
    guide_planes_through, project_to_screen, slice_quad, slice_quad_for_layer,
};
pub use plane::{PlaneAxes, PlaneInfo, View, arrow_to_world, axis_in_plane, world_to_screen_delta};
pub use projection::{SliceOffset, cell_to_slice, slice_offset, slice_to_cell};
