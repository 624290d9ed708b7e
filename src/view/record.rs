//! Ready-made `GameView` implementations: a no-op sink and a recorder.
//!
//! `RecordingView` keeps every notification in order. Integration tests and
//! headless drivers use it to assert on exactly what a renderer would have
//! been told.

use serde::{Deserialize, Serialize};

use super::{CardFace, GameView, MessageKind, WinSummary};

/// A view that ignores every notification.
///
/// Useful when driving the engine for its state alone (benchmarks, replays).
#[derive(Clone, Copy, Debug, Default)]
pub struct NullView;

impl GameView for NullView {
    fn render_board(&mut self, _cards: &[CardFace]) {}
    fn update_card(&mut self, _index: usize, _face: CardFace) {}
    fn update_score(&mut self, _score: i64) {}
    fn update_moves(&mut self, _moves: u32) {}
    fn show_message(&mut self, _text: &str, _kind: MessageKind) {}
    fn clear_message(&mut self) {}
    fn show_win(&mut self, _summary: &WinSummary) {}
}

/// One recorded notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewEvent {
    /// Full board render (a round started).
    RenderBoard(Vec<CardFace>),
    /// Single card update.
    UpdateCard { index: usize, face: CardFace },
    /// Score display update.
    Score(i64),
    /// Move-count display update.
    Moves(u32),
    /// Transient message.
    Message { text: String, kind: MessageKind },
    /// Transient message cleared.
    ClearMessage,
    /// Terminal win notification.
    Win(WinSummary),
}

/// A view that records every notification in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingView {
    events: Vec<ViewEvent>,
}

impl RecordingView {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events in order.
    #[must_use]
    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// The most recent win notification, if any.
    #[must_use]
    pub fn last_win(&self) -> Option<&WinSummary> {
        self.events.iter().rev().find_map(|e| match e {
            ViewEvent::Win(summary) => Some(summary),
            _ => None,
        })
    }

    /// The most recent transient message, if any.
    #[must_use]
    pub fn last_message(&self) -> Option<(&str, MessageKind)> {
        self.events.iter().rev().find_map(|e| match e {
            ViewEvent::Message { text, kind } => Some((text.as_str(), *kind)),
            _ => None,
        })
    }

    /// The most recent score update, if any.
    #[must_use]
    pub fn last_score(&self) -> Option<i64> {
        self.events.iter().rev().find_map(|e| match e {
            ViewEvent::Score(s) => Some(*s),
            _ => None,
        })
    }

    /// The most recent move-count update, if any.
    #[must_use]
    pub fn last_moves(&self) -> Option<u32> {
        self.events.iter().rev().find_map(|e| match e {
            ViewEvent::Moves(m) => Some(*m),
            _ => None,
        })
    }
}

impl GameView for RecordingView {
    fn render_board(&mut self, cards: &[CardFace]) {
        self.events.push(ViewEvent::RenderBoard(cards.to_vec()));
    }

    fn update_card(&mut self, index: usize, face: CardFace) {
        self.events.push(ViewEvent::UpdateCard { index, face });
    }

    fn update_score(&mut self, score: i64) {
        self.events.push(ViewEvent::Score(score));
    }

    fn update_moves(&mut self, moves: u32) {
        self.events.push(ViewEvent::Moves(moves));
    }

    fn show_message(&mut self, text: &str, kind: MessageKind) {
        self.events.push(ViewEvent::Message {
            text: text.to_string(),
            kind,
        });
    }

    fn clear_message(&mut self) {
        self.events.push(ViewEvent::ClearMessage);
    }

    fn show_win(&mut self, summary: &WinSummary) {
        self.events.push(ViewEvent::Win(summary.clone()));
    }
}
