//! Piece module - a shape at a position on the board
//!
//! The same `Piece` value flows through the active, next, and stored slots;
//! only its position distinguishes them. The session owns every piece
//! exclusively and hands out copies, never references.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::collision::placement_fits;
use crate::core::shapes::{spawn_position, ShapeGrid};
use crate::types::{PieceKind, AXIS_X, AXIS_Y};

/// A shape grid anchored on the board. `pos` is the top-left (2D) or
/// top-left-front (3D) corner of the grid's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece<const N: usize> {
    pub kind: PieceKind,
    pub grid: ShapeGrid,
    pub pos: [i8; N],
}

impl<const N: usize> Piece<N> {
    /// Create a piece at its canonical spawn position for the given board
    /// extents
    pub fn spawn(kind: PieceKind, grid: ShapeGrid, extents: [u8; N]) -> Self {
        Self {
            kind,
            grid,
            pos: spawn_position(&grid, extents),
        }
    }

    /// The same piece back at its canonical spawn position (hold swaps keep
    /// the current rotation)
    pub fn respawned(&self, extents: [u8; N]) -> Self {
        Self {
            pos: spawn_position(&self.grid, extents),
            ..*self
        }
    }

    /// Copy shifted by `delta` along one axis
    pub fn shifted(&self, axis: usize, delta: i8) -> Self {
        let mut pos = self.pos;
        pos[axis] += delta;
        Self { pos, ..*self }
    }

    /// Absolute board coordinates of the four occupied sub-cells
    pub fn cells(&self) -> ArrayVec<[i8; N], 4> {
        self.grid
            .cells()
            .into_iter()
            .map(|(dx, dy)| {
                let mut coord = self.pos;
                coord[AXIS_X] += dx;
                coord[AXIS_Y] += dy;
                coord
            })
            .collect()
    }

    /// Whether the piece fits at its current position
    pub fn fits(&self, board: &Board<N>) -> bool {
        placement_fits(board, &self.grid, self.pos)
    }
}
