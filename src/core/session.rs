//! Game session - the top-level rules state machine
//!
//! Owns the board, the piece slots, and the score/level/gravity progression.
//! External shells drive it through [`GameSession::apply`] and
//! [`GameSession::advance_gravity`] and read it back through snapshots; the
//! session holds no timer of its own.

use crate::core::board::Board;
use crate::core::collision::{drop_distance, resolve_rotation};
use crate::core::piece::Piece;
use crate::core::rng::SimpleRng;
use crate::core::scoring::{gravity_interval_ms, lock_score};
use crate::core::shapes::random_template;
use crate::core::snapshot::{PieceView, SessionSnapshot, StoredView};
use crate::types::{
    Axis, Intent, AXIS_X, AXIS_Y, AXIS_Z, BOARD_HEIGHT, BOARD_WIDTH, LEVEL_SCORE_STEP,
};

/// Rule flags distinguishing the board variants. Depth moves and axis
/// rotation need no flag: they follow from the number of axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ruleset {
    /// Try the kick offsets when an in-place rotation is blocked
    pub kicks: bool,
    /// Hold slot with the once-per-piece reuse lock
    pub hold: bool,
}

/// One independent game. `N` is the number of spatial axes: 2 for a classic
/// well, 3 for a volumetric pit.
#[derive(Debug, Clone)]
pub struct GameSession<const N: usize> {
    board: Board<N>,
    ruleset: Ruleset,
    rng: SimpleRng,
    seed: u32,
    /// Absent only after game-over
    active: Option<Piece<N>>,
    next: Piece<N>,
    stored: Option<Piece<N>>,
    can_store: bool,
    score: u32,
    level: u32,
    gravity_ms: u32,
    game_over: bool,
}

impl GameSession<2> {
    /// Classic 10x20 well with hold and rotation kicks
    pub fn classic(seed: u32) -> Self {
        Self::new(
            [BOARD_WIDTH, BOARD_HEIGHT],
            Ruleset {
                kicks: true,
                hold: true,
            },
            seed,
        )
    }

    /// Plain well: rotation-only (no kicks), no hold slot
    pub fn basic(width: u8, height: u8, seed: u32) -> Self {
        Self::new(
            [width, height],
            Ruleset {
                kicks: false,
                hold: false,
            },
            seed,
        )
    }
}

impl GameSession<3> {
    /// Volumetric pit with depth moves and axis-parametrized rotation.
    /// Depth 1 reproduces the flat single-layer variant.
    pub fn volumetric(width: u8, height: u8, depth: u8, seed: u32) -> Self {
        Self::new(
            [width, height, depth],
            Ruleset {
                kicks: false,
                hold: false,
            },
            seed,
        )
    }
}

impl<const N: usize> GameSession<N> {
    /// Create a session over an empty board and spawn the first piece
    pub fn new(extents: [u8; N], ruleset: Ruleset, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = Self::draw(&mut rng, extents);
        let mut session = Self {
            board: Board::new(extents),
            ruleset,
            rng,
            seed,
            active: None,
            next,
            stored: None,
            can_store: true,
            score: 0,
            level: 1,
            gravity_ms: gravity_interval_ms(1),
            game_over: false,
        };
        session.spawn();
        session
    }

    fn draw(rng: &mut SimpleRng, extents: [u8; N]) -> Piece<N> {
        let (kind, grid) = random_template(rng);
        Piece::spawn(kind, grid, extents)
    }

    /// Promote the next piece to active and draw a fresh next. A promoted
    /// piece that does not fit at its spawn position ends the game.
    fn spawn(&mut self) {
        let extents = self.board.extents();
        let piece = std::mem::replace(&mut self.next, Self::draw(&mut self.rng, extents));
        if piece.fits(&self.board) {
            self.active = Some(piece);
        } else {
            self.active = None;
            self.game_over = true;
        }
    }

    /// Apply one discrete command. Returns whether any state changed; an
    /// intent the rules reject is a no-op, not an error. After game-over
    /// every intent is ignored.
    pub fn apply(&mut self, intent: Intent) -> bool {
        if self.game_over {
            return false;
        }
        match intent {
            Intent::MoveLeft => self.shift(AXIS_X, -1),
            Intent::MoveRight => self.shift(AXIS_X, 1),
            Intent::MoveDown => self.soft_drop(),
            Intent::MoveForward => self.shift_depth(1),
            Intent::MoveBackward => self.shift_depth(-1),
            Intent::Rotate => self.rotate(Axis::Z),
            Intent::RotateAbout(axis) => self.rotate(axis),
            Intent::HardDrop => self.hard_drop(),
            Intent::Store => self.store(),
        }
    }

    /// Gravity tick from the external scheduler; equivalent to a `MoveDown`
    /// intent
    pub fn advance_gravity(&mut self) -> bool {
        self.apply(Intent::MoveDown)
    }

    fn shift(&mut self, axis: usize, delta: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let moved = piece.shifted(axis, delta);
        if moved.fits(&self.board) {
            self.active = Some(moved);
            true
        } else {
            false
        }
    }

    fn shift_depth(&mut self, delta: i8) -> bool {
        if N <= AXIS_Z {
            return false;
        }
        self.shift(AXIS_Z, delta)
    }

    /// Descend one row; a blocked descent locks the piece instead
    fn soft_drop(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        if !self.shift(AXIS_Y, 1) {
            self.lock_and_advance(0);
        }
        true
    }

    fn rotate(&mut self, axis: Axis) -> bool {
        if N <= AXIS_Z && axis != Axis::Z {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        let grid = piece.grid.rotated_about(axis);
        match resolve_rotation(&self.board, &grid, piece.pos, self.ruleset.kicks) {
            Some(pos) => {
                self.active = Some(Piece { grid, pos, ..piece });
                true
            }
            None => false,
        }
    }

    /// Project the active piece straight down and lock it in the same call.
    /// The rows traversed count toward the score as a speed bonus.
    fn hard_drop(&mut self) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let dist = drop_distance(&self.board, &piece.grid, piece.pos);
        let mut landed = piece;
        landed.pos[AXIS_Y] += dist;
        self.active = Some(landed);
        self.lock_and_advance(dist as u32);
        true
    }

    /// Set the active piece aside. A first store banks the piece and spawns
    /// the next one; later stores swap, with the incoming piece repositioned
    /// to its canonical spawn. Locked out until the next lock-and-advance.
    fn store(&mut self) -> bool {
        if !self.ruleset.hold || !self.can_store {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        match self.stored.take() {
            Some(held) => {
                let incoming = held.respawned(self.board.extents());
                self.stored = Some(active);
                if incoming.fits(&self.board) {
                    self.active = Some(incoming);
                } else {
                    self.active = None;
                    self.game_over = true;
                }
            }
            None => {
                self.stored = Some(active);
                self.spawn();
            }
        }
        self.can_store = false;
        true
    }

    /// Merge the active piece into the board, clear full lines, update
    /// score/level/gravity, and promote the next piece. The only path that
    /// mutates the board during play.
    fn lock_and_advance(&mut self, drop_bonus: u32) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.board.lock(&piece.cells(), piece.kind);
        let cleared = self.board.clear_full_lines();
        self.score += lock_score(cleared) + drop_bonus;

        // One big clear can cross several thresholds
        while self.score >= self.level.saturating_mul(LEVEL_SCORE_STEP) {
            self.level += 1;
            self.gravity_ms = gravity_interval_ms(self.level);
        }

        self.can_store = true;
        self.spawn();
    }

    /// Row the active piece would land on if hard-dropped now
    pub fn ghost_y(&self) -> Option<i8> {
        let piece = self.active.as_ref()?;
        Some(piece.pos[AXIS_Y] + drop_distance(&self.board, &piece.grid, piece.pos))
    }

    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    /// Direct board access for tooling and test setup; normal play goes
    /// through intents only
    pub fn board_mut(&mut self) -> &mut Board<N> {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece<N>> {
        self.active
    }

    pub fn next(&self) -> Piece<N> {
        self.next
    }

    pub fn stored(&self) -> Option<Piece<N>> {
        self.stored
    }

    pub fn can_store(&self) -> bool {
        self.can_store
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn gravity_interval_ms(&self) -> u32 {
        self.gravity_ms
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Seed this session was created with (for restarting with the same
    /// piece sequence)
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Fill a reusable snapshot buffer; allocation-free once the buffer's
    /// vectors have grown to size
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.extents.clear();
        out.extents.extend(self.board.extents());
        self.board.write_u8_cells(&mut out.cells);
        out.active = self.active.as_ref().map(PieceView::of);
        out.ghost_y = self.ghost_y();
        out.next = Some(PieceView::of(&self.next));
        out.stored = self.stored.as_ref().map(|piece| StoredView {
            kind: piece.kind,
            grid: piece.grid,
        });
        out.can_store = self.can_store;
        out.score = self.score;
        out.level = self.level;
        out.gravity_interval_ms = self.gravity_ms;
        out.game_over = self.game_over;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut out = SessionSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
