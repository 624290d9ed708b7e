//! The game engine: rules of one round of pair matching, plus scoring.
//!
//! All state lives in the engine; everything visible goes out through a
//! `GameView`. The caller wires up two inputs (difficulty selection and card
//! clicks) and one clock (`advance`), and the engine does the rest.
//!
//! ## Failure semantics
//!
//! Invalid user actions - clicking a matched card, clicking while two cards
//! await resolution, clicking after the win, selecting an unknown
//! difficulty - are silent no-ops, never errors. This is deliberate
//! permissiveness for rapid clicking. The only hard failure is a
//! configuration whose palette cannot cover its largest difficulty, which
//! panics at construction.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{DifficultyConfig, GameConfig, GameRng};
use crate::view::{CardFace, GameView, MessageKind, WinSummary};

use super::round::{AttemptRecord, RoundPhase, RoundState};
use super::scheduler::{RoundId, Scheduler, TaskKind};

/// Message shown when a round starts.
pub const MSG_ROUND_START: &str = "Find all the matching pairs!";
/// Message shown on a successful match.
pub const MSG_MATCH: &str = "Great match!";
/// Message shown on a mismatch.
pub const MSG_MISMATCH: &str = "Try again!";
/// Message shown when the current round is restarted.
pub const MSG_RESTART: &str = "New game started!";

/// One engine owns the configuration, the RNG, the task scheduler and the
/// (optional) current round. No ambient globals anywhere.
#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    rng: GameRng,
    scheduler: Scheduler,
    round_id: RoundId,
    round: Option<RoundState>,
}

impl GameEngine {
    /// Create an engine over a configuration.
    ///
    /// Panics if any registered difficulty needs more distinct symbols than
    /// the palette provides - that is a configuration error and fails fast
    /// rather than dealing duplicate or missing symbols later.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        for difficulty in config.difficulties.values() {
            assert!(
                config.palette.len() >= difficulty.pair_count,
                "Palette has {} symbols but difficulty {:?} needs {}",
                config.palette.len(),
                difficulty.key,
                difficulty.pair_count
            );
        }

        Self {
            rng: GameRng::new(seed),
            scheduler: Scheduler::new(),
            round_id: RoundId::new(0),
            round: None,
            config,
        }
    }

    // === Input boundary ===

    /// Start a round at the given difficulty.
    ///
    /// Unknown keys are a caller error and ignored. Any tasks scheduled by
    /// a previous round are cancelled before the new board is dealt.
    pub fn start_round(&mut self, key: &str, view: &mut dyn GameView) {
        self.start_round_inner(key, MSG_ROUND_START, view);
    }

    /// Restart the current round's difficulty on a fresh board.
    ///
    /// No-op when no round has been started.
    pub fn restart(&mut self, view: &mut dyn GameView) {
        let Some(key) = self.round.as_ref().map(|r| r.difficulty.key.clone()) else {
            return;
        };
        self.start_round_inner(&key, MSG_RESTART, view);
    }

    /// Return to the menu: drop the round and everything it scheduled.
    ///
    /// The engine is inert until the next `start_round`.
    pub fn to_menu(&mut self) {
        self.round = None;
        self.scheduler.clear();
        log::debug!("returned to menu");
    }

    /// Try to reveal the card at `index`.
    ///
    /// Silent no-op unless all preconditions hold: a round is in progress,
    /// input is not locked, the card exists and is face down, and fewer than
    /// two cards are awaiting resolution. Accepting the second card of an
    /// attempt counts a move and schedules the pair resolution.
    pub fn attempt_reveal(&mut self, index: usize, view: &mut dyn GameView) {
        let resolve_delay = self.config.timings.resolve_delay_ms;
        let round_id = self.round_id;

        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.locked || round.unresolved.len() >= 2 {
            return;
        }
        let Some(card) = round.board.card_mut(index) else {
            log::debug!("ignoring reveal outside the board: {}", index);
            return;
        };
        if card.is_revealed() || card.is_matched() {
            return;
        }

        card.reveal();
        let face = CardFace::of(card);
        round.unresolved.push(index);
        view.update_card(index, face);

        if round.unresolved.len() == 2 {
            round.moves += 1;
            view.update_moves(round.moves);
            self.scheduler
                .schedule(round_id, resolve_delay, TaskKind::ResolvePair);
        }
    }

    /// Advance the engine clock and run whatever came due.
    ///
    /// The caller owns real time; tests and UIs alike feed elapsed
    /// milliseconds in. Tasks from a round other than the current one are
    /// stale and dropped. Due tasks are popped one at a time so that a task
    /// cancelling another (a win dropping the pending message clear) covers
    /// tasks due in the same clock step.
    pub fn advance(&mut self, elapsed_ms: u64, view: &mut dyn GameView) {
        self.scheduler.tick(elapsed_ms);
        while let Some(task) = self.scheduler.pop_due() {
            if task.round != self.round_id || self.round.is_none() {
                log::debug!("dropping stale {:?} from {}", task.kind, task.round);
                continue;
            }

            match task.kind {
                TaskKind::ResolvePair => self.resolve_pending_pair(view),
                TaskKind::FinishRound => self.finish_round(view),
                TaskKind::ClearMessage => view.clear_message(),
            }
        }
    }

    // === Deferred actions ===

    /// Judge the two unresolved cards. Runs only via a scheduled task.
    fn resolve_pending_pair(&mut self, view: &mut dyn GameView) {
        let timings = self.config.timings;
        let scoring = self.config.scoring;
        let round_id = self.round_id;

        let Some(round) = self.round.as_mut() else {
            return;
        };
        let &[first, second] = round.unresolved.as_slice() else {
            return;
        };

        let matched = match (round.board.card(first), round.board.card(second)) {
            (Some(a), Some(b)) => a.symbol() == b.symbol(),
            _ => return,
        };

        round.unresolved.clear();
        round.history.push_back(AttemptRecord {
            first,
            second,
            matched,
            move_number: round.moves,
        });

        if matched {
            for index in [first, second] {
                if let Some(card) = round.board.card_mut(index) {
                    card.set_matched();
                }
            }
            round.matched_pairs += 1;
            round.score += round.difficulty.multiplier.apply(scoring.match_base);
        } else {
            for index in [first, second] {
                if let Some(card) = round.board.card_mut(index) {
                    card.conceal();
                }
            }
        }

        let score = round.score;
        let won = matched && round.matched_pairs == round.difficulty.pair_count;

        let mut faces: SmallVec<[(usize, CardFace); 2]> = SmallVec::new();
        for index in [first, second] {
            if let Some(card) = round.board.card(index) {
                faces.push((index, CardFace::of(card)));
            }
        }

        for (index, face) in faces {
            view.update_card(index, face);
        }

        if matched {
            view.update_score(score);
            self.show_transient(view, MSG_MATCH, MessageKind::Success);
            if won {
                // Let the success message land before the win announcement.
                self.scheduler
                    .schedule(round_id, timings.win_delay_ms, TaskKind::FinishRound);
            }
        } else {
            self.show_transient(view, MSG_MISMATCH, MessageKind::Info);
        }
    }

    /// Apply the completion bonus, lock input and announce the win.
    fn finish_round(&mut self, view: &mut dyn GameView) {
        let scoring = self.config.scoring;
        let round_id = self.round_id;

        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.phase == RoundPhase::Won {
            return;
        }

        let par = i64::from(round.difficulty.par());
        let moves = i64::from(round.moves);
        let raw = round.difficulty.multiplier.apply(scoring.win_bonus_base)
            - (moves - par) * scoring.extra_move_penalty;
        round.score += raw.max(0);
        round.locked = true;
        round.phase = RoundPhase::Won;

        let summary = WinSummary {
            difficulty: round.difficulty.display_name.clone(),
            score: round.score,
            moves: round.moves,
            under_par: moves <= par,
        };

        log::debug!(
            "{} won with score {} in {} moves",
            round_id,
            summary.score,
            summary.moves
        );

        // The win notification is terminal; it must not be cleared by a
        // message timer still in flight.
        self.scheduler.cancel(round_id, TaskKind::ClearMessage);

        view.update_score(summary.score);
        view.show_win(&summary);
    }

    fn start_round_inner(&mut self, key: &str, message: &str, view: &mut dyn GameView) {
        let Some(difficulty) = self.config.difficulty(key).cloned() else {
            log::warn!("ignoring unknown difficulty {:?}", key);
            return;
        };

        // Invalidate everything a previous round scheduled.
        self.scheduler.clear();
        self.round_id = self.round_id.next();

        let board = Board::deal(
            difficulty.pair_count,
            self.config.palette.len(),
            &mut self.rng,
        );
        log::debug!(
            "{}: starting {:?} with {} cards",
            self.round_id,
            difficulty.key,
            board.len()
        );

        let faces: Vec<CardFace> = board.cards().iter().map(CardFace::of).collect();
        self.round = Some(RoundState::new(difficulty, board));

        view.render_board(&faces);
        view.update_score(0);
        view.update_moves(0);
        self.show_transient(view, message, MessageKind::Info);
    }

    /// Show a transient message and (re)arm its clear timer.
    fn show_transient(&mut self, view: &mut dyn GameView, text: &str, kind: MessageKind) {
        view.show_message(text, kind);
        // A newer message owns the clear timer.
        self.scheduler.cancel(self.round_id, TaskKind::ClearMessage);
        self.scheduler.schedule(
            self.round_id,
            self.config.timings.message_duration_ms,
            TaskKind::ClearMessage,
        );
    }

    // === Accessors ===

    /// The configuration the engine was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current phase of play.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.round
            .as_ref()
            .map_or(RoundPhase::NotStarted, RoundState::phase)
    }

    /// The current round's state, if one has been started.
    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// The current board, if a round has been started.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.round.as_ref().map(RoundState::board)
    }

    /// The difficulty of the current round, if any.
    #[must_use]
    pub fn current_difficulty(&self) -> Option<&DifficultyConfig> {
        self.round.as_ref().map(RoundState::difficulty)
    }

    /// Cumulative score of the current round (0 when no round).
    #[must_use]
    pub fn score(&self) -> i64 {
        self.round.as_ref().map_or(0, RoundState::score)
    }

    /// Move counter of the current round (0 when no round).
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.round.as_ref().map_or(0, RoundState::moves)
    }

    /// Matched pairs in the current round (0 when no round).
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.round.as_ref().map_or(0, RoundState::matched_pairs)
    }

    /// Engine clock, in milliseconds fed through `advance`.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }
}
