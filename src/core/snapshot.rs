//! Snapshot module - the immutable view a renderer or adapter consumes
//!
//! A snapshot is taken only after an intent or tick has fully resolved and
//! holds no references into the session. It is dimension-erased: coordinates
//! are short axis lists (x, y[, z]) so a 2D well and a 3D pit share one wire
//! shape, and every field is `Serialize` so observers can consume snapshots
//! as line-delimited JSON.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::core::piece::Piece;
use crate::core::shapes::ShapeGrid;
use crate::types::PieceKind;

/// Board coordinate as one entry per spatial axis
pub type Coord = ArrayVec<i8, 3>;

/// View of a positioned piece (active or next)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceView {
    pub kind: PieceKind,
    pub pos: Coord,
    /// Absolute board coordinates of the four occupied sub-cells
    pub cells: ArrayVec<Coord, 4>,
}

impl PieceView {
    pub(crate) fn of<const N: usize>(piece: &Piece<N>) -> Self {
        Self {
            kind: piece.kind,
            pos: piece.pos.iter().copied().collect(),
            cells: piece
                .cells()
                .into_iter()
                .map(|coord| coord.iter().copied().collect())
                .collect(),
        }
    }
}

/// View of the held piece. The stored slot has no meaningful position: it
/// re-enters at the canonical spawn position on swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredView {
    pub kind: PieceKind,
    pub grid: ShapeGrid,
}

/// Full session state at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Board extents, one entry per axis (width, height[, depth])
    pub extents: ArrayVec<u8, 3>,
    /// Flat row-major cell values, 0 = empty, 1..=7 = catalog index + 1
    pub cells: Vec<u8>,
    pub active: Option<PieceView>,
    /// Row the active piece would land on if hard-dropped now
    pub ghost_y: Option<i8>,
    pub next: Option<PieceView>,
    pub stored: Option<StoredView>,
    pub can_store: bool,
    pub score: u32,
    pub level: u32,
    pub gravity_interval_ms: u32,
    pub game_over: bool,
    pub seed: u32,
}

impl SessionSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
