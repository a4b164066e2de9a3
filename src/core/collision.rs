//! Collision & placement engine - pure validity checks
//!
//! All placement decisions go through [`placement_fits`]; the board itself
//! never rejects a move. Cells above the top of the well (negative y) are a
//! legal position for a freshly spawned or kicked piece: they skip the
//! occupancy check but still must satisfy horizontal and depth bounds.

use crate::core::board::Board;
use crate::core::shapes::ShapeGrid;
use crate::types::{AXIS_X, AXIS_Y, AXIS_Z};

/// Offsets tried, in order, when an in-place rotation is blocked:
/// right 1, left 1, up 1, up-right 1, up-left 1.
///
/// This short asymmetric list is a policy constant of the hold-enabled well,
/// not a standard rotation-system table; the order is load-bearing.
pub const KICK_OFFSETS: [(i8, i8); 5] = [(1, 0), (-1, 0), (0, -1), (1, -1), (-1, -1)];

/// Check whether a shape fits at a candidate position.
///
/// Fails when any occupied sub-cell lands outside `[0, width)` horizontally
/// or `[0, depth)` depth-wise, at or below the floor (`y >= height`), or on
/// an occupied board cell. Sub-cells with negative y are exempt from the
/// occupancy check.
pub fn placement_fits<const N: usize>(board: &Board<N>, grid: &ShapeGrid, pos: [i8; N]) -> bool {
    for (dx, dy) in grid.cells() {
        let mut coord = pos;
        coord[AXIS_X] += dx;
        coord[AXIS_Y] += dy;

        // Lateral and depth bounds apply even above the top of the well
        if coord[AXIS_X] < 0 || coord[AXIS_X] >= board.extent(AXIS_X) as i8 {
            return false;
        }
        if N > AXIS_Z && (coord[AXIS_Z] < 0 || coord[AXIS_Z] >= board.extent(AXIS_Z) as i8) {
            return false;
        }
        if coord[AXIS_Y] >= board.extent(AXIS_Y) as i8 {
            return false;
        }
        if coord[AXIS_Y] < 0 {
            continue;
        }
        if board.is_occupied(coord) {
            return false;
        }
    }
    true
}

/// Resolve a rotation: accept the in-place position if it fits, otherwise
/// (kicks permitting) the first entry of [`KICK_OFFSETS`] that does.
/// `None` rejects the rotation and leaves the piece unchanged.
pub fn resolve_rotation<const N: usize>(
    board: &Board<N>,
    grid: &ShapeGrid,
    pos: [i8; N],
    kicks: bool,
) -> Option<[i8; N]> {
    if placement_fits(board, grid, pos) {
        return Some(pos);
    }
    if !kicks {
        return None;
    }
    for &(dx, dy) in KICK_OFFSETS.iter() {
        let mut kicked = pos;
        kicked[AXIS_X] += dx;
        kicked[AXIS_Y] += dy;
        if placement_fits(board, grid, kicked) {
            return Some(kicked);
        }
    }
    None
}

/// Ray-cast the number of rows a shape can still descend from `pos` before
/// hitting the first obstruction or the floor. Bounded by the board height.
pub fn drop_distance<const N: usize>(board: &Board<N>, grid: &ShapeGrid, pos: [i8; N]) -> i8 {
    let mut dist: i8 = 0;
    loop {
        let mut probe = pos;
        probe[AXIS_Y] = pos[AXIS_Y] + dist + 1;
        if placement_fits(board, grid, probe) {
            dist += 1;
        } else {
            break;
        }
    }
    dist
}
