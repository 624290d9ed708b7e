//! The render boundary.
//!
//! The engine owns state and rules; everything visible goes through the
//! `GameView` trait. A DOM renderer, a TUI, or a test harness implements it
//! and gets told exactly what changed - the engine is fully playable with no
//! visual surface at all.
//!
//! ## Information hiding
//!
//! `CardFace` carries a symbol only while the card is face up. A view never
//! learns what is on the back of a face-down card, so a renderer cannot leak
//! the board even by accident.

mod record;

pub use record::{NullView, RecordingView, ViewEvent};

use serde::{Deserialize, Serialize};

use crate::board::{Card, SymbolId};

/// Kind of a transient message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// Neutral information (round started, mismatch).
    Info,
    /// A pair was matched.
    Success,
}

/// What a view may know about one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    /// Is the card face up?
    pub revealed: bool,

    /// Has the card been matched?
    pub matched: bool,

    /// The symbol, present only while the card is face up.
    pub symbol: Option<SymbolId>,
}

impl CardFace {
    /// Snapshot a card, hiding the symbol of face-down cards.
    #[must_use]
    pub fn of(card: &Card) -> Self {
        Self {
            revealed: card.is_revealed(),
            matched: card.is_matched(),
            symbol: card.is_revealed().then(|| card.symbol()),
        }
    }

    /// A face-down card.
    #[must_use]
    pub fn down() -> Self {
        Self {
            revealed: false,
            matched: false,
            symbol: None,
        }
    }
}

/// Terminal win notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinSummary {
    /// Display name of the difficulty that was cleared.
    pub difficulty: String,

    /// Final score including the completion bonus.
    pub score: i64,

    /// Total pair attempts.
    pub moves: u32,

    /// Was the round cleared at or under par (the minimum attempt count)?
    pub under_par: bool,
}

impl std::fmt::Display for WinSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You won! Level: {}, final score: {}, moves: {}{}",
            self.difficulty,
            self.score,
            self.moves,
            if self.under_par { " - perfect!" } else { "" }
        )
    }
}

/// Render boundary contract.
///
/// The engine calls these as state changes. Implementations must not call
/// back into the engine from within a notification.
pub trait GameView {
    /// A new round started: draw the whole board (all cards face down).
    fn render_board(&mut self, cards: &[CardFace]);

    /// One card's visible state changed.
    fn update_card(&mut self, index: usize, face: CardFace);

    /// The score changed.
    fn update_score(&mut self, score: i64);

    /// The move counter changed.
    fn update_moves(&mut self, moves: u32);

    /// Show a transient message. The engine clears it later via
    /// `clear_message` unless a win supersedes it.
    fn show_message(&mut self, text: &str, kind: MessageKind);

    /// Clear the transient message area.
    fn clear_message(&mut self);

    /// The round was won. Terminal until the next round starts.
    fn show_win(&mut self, summary: &WinSummary);
}
