//! The game engine: round state, explicit task scheduling, and the rules
//! of the flip/match loop.
//!
//! Per-round state machine:
//!
//! ```text
//! NotStarted -> InProgress -> (Idle <-> OneRevealed <-> PendingResolution) -> Won
//! ```
//!
//! `Won` is terminal until the next `start_round`. There is no losing state;
//! a round can only be completed, just with a worse score.

mod game;
mod round;
mod scheduler;

pub use game::{GameEngine, MSG_MATCH, MSG_MISMATCH, MSG_RESTART, MSG_ROUND_START};
pub use round::{AttemptRecord, RoundPhase, RoundState};
pub use scheduler::{RoundId, ScheduledTask, Scheduler, TaskKind};
