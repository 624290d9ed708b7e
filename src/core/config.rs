//! Fixed configuration surface: difficulties, symbol palette, timing and
//! scoring constants.
//!
//! The engine never hardcodes how many pairs a round has or what a match is
//! worth - callers provide a `GameConfig` at startup. `GameConfig::standard()`
//! reproduces the classic five-level setup (easy through master) with the
//! familiar 64-glyph palette.
//!
//! ## Score arithmetic
//!
//! Difficulty multipliers are fractional (x1.5, x2.5) but scores are integer
//! and floored after multiplication. `Multiplier` stores tenths so
//! `floor(base * multiplier)` is exact integer arithmetic with no float
//! rounding in sight.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::SymbolId;

/// Score multiplier in tenths (15 = x1.5).
///
/// `apply` floors after multiplying, which is the contract every score in
/// the game depends on: a x1.5 match is worth exactly `floor(100 * 1.5)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Multiplier(u32);

impl Multiplier {
    /// Create a multiplier from tenths (10 = x1.0).
    #[must_use]
    pub const fn from_tenths(tenths: u32) -> Self {
        Self(tenths)
    }

    /// Get the raw tenths value.
    #[must_use]
    pub const fn tenths(self) -> u32 {
        self.0
    }

    /// Multiply a non-negative base value, flooring the result.
    #[must_use]
    pub fn apply(self, base: i64) -> i64 {
        debug_assert!(base >= 0, "multiplier bases are non-negative");
        base * i64::from(self.0) / 10
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// Configuration for a single difficulty level.
///
/// Immutable once registered; selected by key when a round starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Stable identifier used by the input boundary ("easy", "hard", ...).
    pub key: String,

    /// Human-readable name for display.
    pub display_name: String,

    /// Number of pairs on the board (board size is twice this).
    pub pair_count: usize,

    /// Score multiplier for matches and the completion bonus.
    pub multiplier: Multiplier,
}

impl DifficultyConfig {
    /// Create a new difficulty configuration.
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        pair_count: usize,
        multiplier: Multiplier,
    ) -> Self {
        assert!(pair_count >= 1, "A difficulty needs at least one pair");

        Self {
            key: key.into(),
            display_name: display_name.into(),
            pair_count,
            multiplier,
        }
    }

    /// Par: the minimum number of pair attempts that can clear the board.
    #[must_use]
    pub fn par(&self) -> u32 {
        self.pair_count as u32
    }
}

/// Timing constants, in milliseconds of scheduler time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// Delay between the second reveal and pair resolution, long enough for
    /// a human to perceive both faces.
    pub resolve_delay_ms: u64,

    /// Delay between the final match and the terminal win notification.
    pub win_delay_ms: u64,

    /// How long a transient message stays up before auto-clearing.
    pub message_duration_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            resolve_delay_ms: 1000,
            win_delay_ms: 500,
            message_duration_ms: 2000,
        }
    }
}

/// Scoring constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    /// Base score per matched pair, before the difficulty multiplier.
    pub match_base: i64,

    /// Base completion bonus, before the difficulty multiplier.
    pub win_bonus_base: i64,

    /// Bonus deduction per move beyond par.
    pub extra_move_penalty: i64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            match_base: 100,
            win_bonus_base: 500,
            extra_move_penalty: 20,
        }
    }
}

/// Complete game configuration.
///
/// Callers provide this at startup. The symbol palette is shared across all
/// difficulties; each board draws `pair_count` distinct symbols from it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Registered difficulties by key.
    pub difficulties: FxHashMap<String, DifficultyConfig>,

    /// Symbol palette. A card's `SymbolId` is an index into this list; the
    /// engine only compares ids, glyphs exist for the render boundary.
    pub palette: Vec<String>,

    /// Timing constants.
    pub timings: Timings,

    /// Scoring constants.
    pub scoring: Scoring,
}

impl GameConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            difficulties: FxHashMap::default(),
            palette: Vec::new(),
            timings: Timings::default(),
            scoring: Scoring::default(),
        }
    }

    /// The classic setup: five difficulties over a 64-glyph palette.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_palette(standard_palette())
            .with_difficulty(DifficultyConfig::new(
                "easy",
                "Easy",
                3,
                Multiplier::from_tenths(10),
            ))
            .with_difficulty(DifficultyConfig::new(
                "medium",
                "Medium",
                6,
                Multiplier::from_tenths(15),
            ))
            .with_difficulty(DifficultyConfig::new(
                "hard",
                "Hard",
                8,
                Multiplier::from_tenths(20),
            ))
            .with_difficulty(DifficultyConfig::new(
                "expert",
                "Expert",
                12,
                Multiplier::from_tenths(25),
            ))
            .with_difficulty(DifficultyConfig::new(
                "master",
                "Master",
                16,
                Multiplier::from_tenths(30),
            ))
    }

    /// Register a difficulty (builder pattern).
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: DifficultyConfig) -> Self {
        self.difficulties
            .insert(difficulty.key.clone(), difficulty);
        self
    }

    /// Set the symbol palette (builder pattern).
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        self.palette = palette;
        self
    }

    /// Set the timing constants (builder pattern).
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Set the scoring constants (builder pattern).
    #[must_use]
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Look up a difficulty by key.
    #[must_use]
    pub fn difficulty(&self, key: &str) -> Option<&DifficultyConfig> {
        self.difficulties.get(key)
    }

    /// Glyph for a symbol, for the render boundary.
    #[must_use]
    pub fn glyph(&self, symbol: SymbolId) -> Option<&str> {
        self.palette.get(symbol.index()).map(String::as_str)
    }

    /// Largest pair count across registered difficulties.
    #[must_use]
    pub fn max_pair_count(&self) -> usize {
        self.difficulties
            .values()
            .map(|d| d.pair_count)
            .max()
            .unwrap_or(0)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// The 64 glyphs of the classic palette.
fn standard_palette() -> Vec<String> {
    [
        "🎈", "🎨", "🎭", "🎪", "🎯", "🎲", "🎸", "🎺", //
        "🎻", "🎹", "🎼", "🎵", "🎶", "🎤", "🎧", "🎬", //
        "🍎", "🍌", "🍒", "🍓", "🍑", "🍊", "🍋", "🍍", //
        "🥝", "🍇", "🥥", "🍉", "🍈", "🍅", "🥕", "🌽", //
        "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", //
        "🐨", "🐯", "🦁", "🐮", "🐷", "🐸", "🐵", "🐔", //
        "⚽", "🏀", "🏈", "⚾", "🎾", "🏐", "🏓", "🏸", //
        "🥊", "⛳", "🏹", "🎣", "🎿", "🛷", "🏂", "🏄",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
