//! Cards and their symbols.
//!
//! A symbol is an opaque comparable identifier - the engine only ever asks
//! whether two cards carry the same one. Mapping a `SymbolId` to something
//! visible (a glyph, a sprite) is the render boundary's business, via
//! `GameConfig::glyph`.

use serde::{Deserialize, Serialize};

/// Opaque symbol identifier: an index into the configured palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u16);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Palette index for this symbol.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// A single card on the board.
///
/// The symbol is fixed at deal time; `revealed` and `matched` mutate during
/// play. A matched card is always also revealed - the mutators preserve
/// that invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    symbol: SymbolId,
    revealed: bool,
    matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn face_down(symbol: SymbolId) -> Self {
        Self {
            symbol,
            revealed: false,
            matched: false,
        }
    }

    /// The card's symbol.
    #[must_use]
    pub fn symbol(&self) -> SymbolId {
        self.symbol
    }

    /// Is the card currently face up?
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Has the card been matched?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Turn the card face up.
    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Turn the card face down again (mismatch flip-back).
    ///
    /// Matched cards never flip back.
    pub(crate) fn conceal(&mut self) {
        debug_assert!(!self.matched, "matched cards stay revealed");
        self.revealed = false;
    }

    /// Mark the card matched. It stays revealed for the rest of the round.
    pub(crate) fn set_matched(&mut self) {
        self.revealed = true;
        self.matched = true;
    }
}
