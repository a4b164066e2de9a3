//! Core types shared across the crate
//! This module contains pure data types and tuning constants

use serde::{Deserialize, Serialize};

/// Default well dimensions (classic 2D variant)
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Axis indices into a coordinate vector `[i8; N]`.
/// x = horizontal, y = vertical (down is positive), z = depth (3D only).
pub const AXIS_X: usize = 0;
pub const AXIS_Y: usize = 1;
pub const AXIS_Z: usize = 2;

/// Gravity curve (in milliseconds)
pub const BASE_GRAVITY_MS: u32 = 1000;
pub const GRAVITY_STEP_MS: u32 = 100;
pub const GRAVITY_FLOOR_MS: u32 = 100;

/// Scoring constants: every lock is worth `LOCK_BONUS`, plus
/// `cleared_lines^2 * LINE_CLEAR_FACTOR`.
pub const LOCK_BONUS: u32 = 10;
pub const LINE_CLEAR_FACTOR: u32 = 100;

/// Score threshold per level: the level increments once the cumulative score
/// reaches `level * LEVEL_SCORE_STEP`.
pub const LEVEL_SCORE_STEP: u32 = 1000;

/// Tetromino piece kinds. Doubles as the opaque color id: the snapshot
/// resolves a kind to its cell value exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Index into the shape catalog
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::J => 3,
            PieceKind::L => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Non-zero cell value written into the board on lock (0 = empty)
    pub fn cell_value(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`PieceKind::cell_value`]; `None` for 0 or out of range
    pub fn from_cell_value(value: u8) -> Option<Self> {
        match value {
            0 => None,
            v => Self::ALL.get(v as usize - 1).copied(),
        }
    }
}

/// Rotation axis for volumetric pits. On a 2D well only `Z` (the screen
/// plane) is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Discrete commands the external shell feeds into a session.
///
/// Every intent is a validated no-op when it cannot be honored: an illegal
/// move changes nothing and reports `false`, it is never an error. Intents
/// that do not exist on the current board shape (depth moves on a 2D well,
/// store without a hold slot) are no-ops as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    MoveLeft,
    MoveRight,
    /// Soft drop: descend one row, locking the piece when it cannot
    MoveDown,
    /// Depth moves, volumetric pits only (+z / -z)
    MoveForward,
    MoveBackward,
    /// Planar clockwise quarter-turn
    Rotate,
    /// Axis-parametrized rotation, volumetric pits only (except `Z`, which
    /// is the planar rotation on any board)
    RotateAbout(Axis),
    HardDrop,
    /// Set the active piece aside (hold-enabled wells only)
    Store,
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
