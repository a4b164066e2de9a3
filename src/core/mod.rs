//! Core module - pure game rules with no external dependencies
//!
//! Shape catalog, board storage, collision checks, the piece slots, and the
//! session state machine. Nothing in here owns a timer or talks to a UI.

pub mod board;
pub mod collision;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use collision::{drop_distance, placement_fits, resolve_rotation, KICK_OFFSETS};
pub use piece::Piece;
pub use rng::SimpleRng;
pub use scoring::HighScore;
pub use session::{GameSession, Ruleset};
pub use shapes::{random_template, spawn_position, template, ShapeGrid};
pub use snapshot::{PieceView, SessionSnapshot, StoredView};
