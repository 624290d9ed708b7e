//! # rust-pairs
//!
//! A deterministic pair-matching (memory) game engine.
//!
//! A grid of face-down cards is revealed two at a time; matching pairs stay
//! revealed, mismatches flip back after a short delay, and the round is won
//! when every pair is found. This crate is the engine only: state, rules,
//! scoring and scheduling. Rendering and input are boundaries, not
//! residents.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: one `GameEngine` value owns the configuration,
//!    the RNG, the scheduler and the current round.
//!
//! 2. **Presentation behind a trait**: every visible effect goes through
//!    `GameView`. The engine is fully playable headless; `RecordingView`
//!    captures what a renderer would have been told.
//!
//! 3. **Caller-driven time**: deferred actions (pair resolution, the win
//!    announcement, message clearing) are explicit scheduled tasks keyed to
//!    the round that created them, run by feeding elapsed milliseconds to
//!    `GameEngine::advance`. Restarting a round invalidates stale tasks.
//!
//! 4. **Deterministic deals**: all randomness flows through a seeded
//!    ChaCha8 RNG, so a round is reproducible from its seed.
//!
//! ## Example
//!
//! ```
//! use rust_pairs::{GameConfig, GameEngine, RecordingView, RoundPhase};
//!
//! let mut game = GameEngine::new(GameConfig::standard(), 42);
//! let mut view = RecordingView::new();
//!
//! game.start_round("easy", &mut view);
//! assert_eq!(game.board().unwrap().len(), 6);
//!
//! game.attempt_reveal(0, &mut view);
//! game.attempt_reveal(1, &mut view);
//! game.advance(1000, &mut view); // resolution fires after the delay
//!
//! assert_eq!(game.moves(), 1);
//! assert_eq!(game.phase(), RoundPhase::InProgress);
//! ```
//!
//! ## Modules
//!
//! - `core`: configuration surface and deterministic RNG
//! - `board`: cards, symbols, and board dealing
//! - `engine`: round state, scheduler, and the `GameEngine`
//! - `view`: the render-boundary contract

pub mod board;
pub mod core;
pub mod engine;
pub mod view;

// Re-export commonly used types
pub use crate::core::{DifficultyConfig, GameConfig, GameRng, Multiplier, Scoring, Timings};

pub use crate::board::{Board, Card, SymbolId};

pub use crate::engine::{
    AttemptRecord, GameEngine, RoundId, RoundPhase, RoundState, ScheduledTask, Scheduler,
    TaskKind,
};

pub use crate::view::{
    CardFace, GameView, MessageKind, NullView, RecordingView, ViewEvent, WinSummary,
};
