//! The board: an ordered sequence of cards, dealt once per round.
//!
//! ## Dealing
//!
//! A board for `pair_count` pairs is built in three steps:
//!
//! 1. Draw `pair_count` distinct symbols from the palette (partial
//!    Fisher-Yates over the palette indices, uniform without replacement).
//! 2. Duplicate each symbol so it appears on exactly two cards.
//! 3. Shuffle the full card sequence uniformly.
//!
//! All three steps pull from the round's `GameRng`, so a deal is fully
//! determined by the seed.

mod card;

pub use card::{Card, SymbolId};

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// An ordered sequence of cards. Length is always `2 * pair_count`, and for
/// every symbol present exactly two cards carry it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
    pair_count: usize,
}

impl Board {
    /// Deal a fresh board of `pair_count` pairs from a palette of
    /// `palette_size` symbols.
    ///
    /// Panics if the palette cannot supply `pair_count` distinct symbols.
    /// The engine validates this at construction; the assert here is the
    /// hard backstop.
    #[must_use]
    pub fn deal(pair_count: usize, palette_size: usize, rng: &mut GameRng) -> Self {
        assert!(pair_count >= 1, "A board needs at least one pair");
        assert!(
            palette_size >= pair_count,
            "Palette has {} symbols but the board needs {} distinct ones",
            palette_size,
            pair_count
        );
        // SymbolId is a u16 palette index; a larger palette would silently
        // truncate in the cast below.
        assert!(
            palette_size <= usize::from(u16::MAX) + 1,
            "Palette of {} symbols exceeds the symbol index space",
            palette_size
        );

        // Partial Fisher-Yates: after i swaps, indices[..i] is a uniform
        // draw of i distinct palette indices.
        let mut indices: Vec<u16> = (0..palette_size).map(|i| i as u16).collect();
        for i in 0..pair_count {
            let j = rng.gen_range_usize(i..palette_size);
            indices.swap(i, j);
        }

        let mut cards = Vec::with_capacity(pair_count * 2);
        for &index in &indices[..pair_count] {
            let symbol = SymbolId::new(index);
            cards.push(Card::face_down(symbol));
            cards.push(Card::face_down(symbol));
        }

        rng.shuffle(&mut cards);

        Self { cards, pair_count }
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a dealt board; here for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs this board was dealt with.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Get a card by board index.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Get a mutable card by board index.
    pub(crate) fn card_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Have all pairs been matched?
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn symbol_counts(board: &Board) -> FxHashMap<SymbolId, usize> {
        let mut counts = FxHashMap::default();
        for card in board.cards() {
            *counts.entry(card.symbol()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_deal_size_and_pairing() {
        let mut rng = GameRng::new(42);

        for pair_count in [1, 3, 6, 8, 12, 16] {
            let board = Board::deal(pair_count, 64, &mut rng);

            assert_eq!(board.len(), pair_count * 2);
            assert_eq!(board.pair_count(), pair_count);

            let counts = symbol_counts(&board);
            assert_eq!(counts.len(), pair_count);
            assert!(counts.values().all(|&c| c == 2));
        }
    }

    #[test]
    fn test_deal_starts_face_down() {
        let mut rng = GameRng::new(1);
        let board = Board::deal(6, 64, &mut rng);

        assert!(board
            .cards()
            .iter()
            .all(|c| !c.is_revealed() && !c.is_matched()));
        assert!(!board.is_cleared());
    }

    #[test]
    fn test_deal_symbols_within_palette() {
        let mut rng = GameRng::new(7);
        let board = Board::deal(5, 5, &mut rng);

        assert!(board.cards().iter().all(|c| c.symbol().index() < 5));
        assert_eq!(symbol_counts(&board).len(), 5);
    }

    #[test]
    fn test_deal_is_deterministic_per_seed() {
        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);

        let b1 = Board::deal(8, 64, &mut rng1);
        let b2 = Board::deal(8, 64, &mut rng2);

        assert_eq!(b1.cards(), b2.cards());
    }

    #[test]
    fn test_deals_vary_across_seeds() {
        // Not all deals are identical: over several seeds at least one
        // ordering must differ.
        let reference: Vec<_> = {
            let mut rng = GameRng::new(0);
            Board::deal(8, 64, &mut rng)
                .cards()
                .iter()
                .map(|c| c.symbol())
                .collect()
        };

        let any_different = (1..10u64).any(|seed| {
            let mut rng = GameRng::new(seed);
            let symbols: Vec<_> = Board::deal(8, 64, &mut rng)
                .cards()
                .iter()
                .map(|c| c.symbol())
                .collect();
            symbols != reference
        });

        assert!(any_different);
    }

    #[test]
    fn test_card_lookup() {
        let mut rng = GameRng::new(3);
        let board = Board::deal(3, 64, &mut rng);

        assert!(board.card(0).is_some());
        assert!(board.card(5).is_some());
        assert!(board.card(6).is_none());
    }

    #[test]
    #[should_panic(expected = "Palette has 2 symbols")]
    fn test_deal_rejects_small_palette() {
        let mut rng = GameRng::new(0);
        Board::deal(3, 2, &mut rng);
    }

    #[test]
    #[should_panic(expected = "exceeds the symbol index space")]
    fn test_deal_rejects_palette_beyond_symbol_space() {
        let mut rng = GameRng::new(0);
        Board::deal(3, usize::from(u16::MAX) + 2, &mut rng);
    }

    #[test]
    fn test_deal_accepts_full_symbol_space() {
        let mut rng = GameRng::new(0);
        let board = Board::deal(3, usize::from(u16::MAX) + 1, &mut rng);
        assert_eq!(symbol_counts(&board).len(), 3);
    }

    #[test]
    fn test_cleared_board() {
        let mut rng = GameRng::new(5);
        let mut board = Board::deal(2, 64, &mut rng);

        for i in 0..board.len() {
            board.card_mut(i).unwrap().set_matched();
        }

        assert!(board.is_cleared());
    }
}
