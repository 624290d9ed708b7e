//! Per-round mutable state.
//!
//! A `RoundState` lives from one `start_round` to the next: the dealt board,
//! the unresolved set (the face-up cards not yet judged), counters, score,
//! the input lock, and the attempt history.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::DifficultyConfig;

/// Where a round is in its life cycle.
///
/// There is no losing state: a round can only be completed, just with a
/// worse score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round has been started (or the player returned to the menu).
    NotStarted,
    /// Cards are being flipped.
    InProgress,
    /// All pairs found. Terminal until a new round starts.
    Won,
}

/// One resolved pair attempt, for history/replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Board index of the first card revealed.
    pub first: usize,

    /// Board index of the second card revealed.
    pub second: usize,

    /// Did the symbols match?
    pub matched: bool,

    /// Move counter value for this attempt (1-based).
    pub move_number: u32,
}

/// The mutable session state of one round.
#[derive(Clone, Debug)]
pub struct RoundState {
    pub(crate) difficulty: DifficultyConfig,
    pub(crate) board: Board,

    /// Face-up cards not yet judged. Holds 0, 1 or (transiently) 2 indices.
    pub(crate) unresolved: SmallVec<[usize; 2]>,

    pub(crate) matched_pairs: usize,
    pub(crate) moves: u32,
    pub(crate) score: i64,

    /// True once the round is won; no further reveals are accepted.
    pub(crate) locked: bool,

    pub(crate) phase: RoundPhase,

    /// Resolved attempts in order. `im::Vector` so consumers can snapshot
    /// the history cheaply mid-round.
    pub(crate) history: Vector<AttemptRecord>,
}

impl RoundState {
    /// Fresh state over a newly dealt board.
    #[must_use]
    pub(crate) fn new(difficulty: DifficultyConfig, board: Board) -> Self {
        Self {
            difficulty,
            board,
            unresolved: SmallVec::new(),
            matched_pairs: 0,
            moves: 0,
            score: 0,
            locked: false,
            phase: RoundPhase::InProgress,
            history: Vector::new(),
        }
    }

    /// The difficulty this round was started with.
    #[must_use]
    pub fn difficulty(&self) -> &DifficultyConfig {
        &self.difficulty
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Indices of face-up cards not yet judged.
    #[must_use]
    pub fn unresolved(&self) -> &[usize] {
        &self.unresolved
    }

    /// Pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Pair attempts so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Cumulative score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Is input locked (round won)?
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Resolved attempts in order.
    #[must_use]
    pub fn history(&self) -> &Vector<AttemptRecord> {
        &self.history
    }
}
