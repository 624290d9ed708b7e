//! Core building blocks: configuration and deterministic RNG.

pub mod config;
pub mod rng;

pub use config::{DifficultyConfig, GameConfig, Multiplier, Scoring, Timings};
pub use rng::GameRng;
