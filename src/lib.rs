//! blockfall - falling-block puzzle rules engine.
//!
//! Pure game rules with no rendering, input handling, or timer ownership: an
//! external shell feeds discrete intents and gravity ticks into a
//! [`GameSession`] and reads the resulting state back through an immutable
//! snapshot.
//!
//! The same core is generic over the number of spatial axes (`N = 2` for a
//! classic well, `N = 3` for a volumetric pit), so the movement, collision,
//! clearing, and scoring rules exist exactly once.

pub mod core;
pub mod types;

pub use crate::core::session::{GameSession, Ruleset};
pub use crate::core::snapshot::SessionSnapshot;
pub use crate::types::{Axis, Intent, PieceKind};
