//! Game session - the state machine orchestrating spawn, gravity, lock,
//! line clear and scoring
//!
//! The session owns the board and the active piece and is their sole mutator.
//! Both the gravity timer and the input mapper feed it discrete intents; the
//! caller serializes them (one event loop), so each intent fully resolves
//! before the next begins.

use crate::core::board::Board;
use crate::core::piece::{rotate_cw, Piece};
use crate::core::rng::SimpleRng;
use crate::types::{GameIntent, Phase, POINTS_PER_LINE};

/// Complete game state for one play session.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Option<Piece>,
    score: u32,
    phase: Phase,
    rng: SimpleRng,
}

impl GameSession {
    /// Create an idle session with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            score: 0,
            phase: Phase::Idle,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Start (or restart) the game: full reset, then spawn the first piece.
    ///
    /// Covers both `Idle -> Running` and `GameOver -> Running`; a no-op while
    /// already running.
    pub fn start(&mut self) {
        if self.phase == Phase::Running {
            return;
        }
        self.board.clear();
        self.score = 0;
        self.active = Some(Piece::spawn(&mut self.rng));
        self.phase = Phase::Running;
    }

    /// User-initiated stop: `Running -> Idle`.
    ///
    /// Board and score are retained; piece activity halts until restart.
    pub fn stop(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Idle;
        }
    }

    /// One gravity tick: descend the active piece, or lock it and respawn.
    pub fn tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(piece) = self.active.as_mut() else {
            return;
        };
        if !self.board.collides(piece.x, piece.y + 1, &piece.matrix) {
            piece.y += 1;
            return;
        }
        self.lock_active();
    }

    /// Apply a discrete intent. Intents are dropped unless running; an intent
    /// whose result would collide is a silent no-op.
    ///
    /// Returns whether the piece actually changed.
    pub fn apply(&mut self, intent: GameIntent) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        match intent {
            GameIntent::MoveLeft => self.try_shift(-1, 0),
            GameIntent::MoveRight => self.try_shift(1, 0),
            GameIntent::MoveDown => self.try_shift(0, 1),
            GameIntent::Rotate => self.try_rotate(),
            GameIntent::HardDrop => self.hard_drop(),
        }
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if self.board.collides(piece.x + dx, piece.y + dy, &piece.matrix) {
            return false;
        }
        piece.x += dx;
        piece.y += dy;
        true
    }

    fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        let rotated = rotate_cw(&piece.matrix);
        if self.board.collides(piece.x, piece.y, &rotated) {
            return false;
        }
        piece.matrix = rotated;
        true
    }

    /// Drop to the lowest legal row. Locking happens on the next tick, so a
    /// final move/rotate at the bottom is still possible.
    fn hard_drop(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        let mut moved = false;
        while !self.board.collides(piece.x, piece.y + 1, &piece.matrix) {
            piece.y += 1;
            moved = true;
        }
        moved
    }

    /// Merge the active piece, clear lines, score, and respawn.
    ///
    /// Top-out contract: the game ends when the board cannot accept a freshly
    /// spawned piece at its spawn position. The board is left as merged.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.board.merge(&piece);

        let cleared = self.board.clear_full_rows();
        self.score += cleared as u32 * POINTS_PER_LINE;

        let next = Piece::spawn(&mut self.rng);
        if self.board.collides(next.x, next.y, &next.matrix) {
            self.phase = Phase::GameOver;
            return;
        }
        self.active = Some(next);
    }

    /// Replace the active piece (tests force specific kinds this way).
    #[cfg(test)]
    fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }

    #[cfg(test)]
    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
