//! End-to-end scoring scenarios with exact expected numbers.

use rust_pairs::{GameConfig, GameEngine, RecordingView, RoundPhase, ViewEvent};

fn engine(seed: u64) -> GameEngine {
    GameEngine::new(GameConfig::standard(), seed)
}

fn find_matching_pair(game: &GameEngine) -> (usize, usize) {
    let board = game.board().expect("round in progress");
    for i in 0..board.len() {
        let a = board.card(i).unwrap();
        if a.is_matched() {
            continue;
        }
        for j in (i + 1)..board.len() {
            let b = board.card(j).unwrap();
            if !b.is_matched() && a.symbol() == b.symbol() {
                return (i, j);
            }
        }
    }
    panic!("no unmatched pair left");
}

fn find_mismatching_pair(game: &GameEngine) -> (usize, usize) {
    let board = game.board().expect("round in progress");
    for i in 0..board.len() {
        let a = board.card(i).unwrap();
        if a.is_matched() {
            continue;
        }
        for j in (i + 1)..board.len() {
            let b = board.card(j).unwrap();
            if !b.is_matched() && a.symbol() != b.symbol() {
                return (i, j);
            }
        }
    }
    panic!("no mismatching cards left");
}

fn attempt(game: &mut GameEngine, view: &mut RecordingView, pair: (usize, usize)) {
    let delay = game.config().timings.resolve_delay_ms;
    game.attempt_reveal(pair.0, view);
    game.attempt_reveal(pair.1, view);
    game.advance(delay, view);
}

/// Clear the whole board with matches only, then run the win announcement.
fn clear_board(game: &mut GameEngine, view: &mut RecordingView) {
    let pair_count = game.current_difficulty().unwrap().pair_count;
    while game.matched_pairs() < pair_count {
        let pair = find_matching_pair(game);
        attempt(game, view, pair);
    }
    let delay = game.config().timings.win_delay_ms;
    game.advance(delay, view);
}

#[test]
fn test_easy_perfect_round_scores_800() {
    let mut game = engine(42);
    let mut view = RecordingView::new();
    game.start_round("easy", &mut view);

    // Board shape: 6 cards, 3 distinct symbols, each exactly twice.
    let board = game.board().unwrap();
    assert_eq!(board.len(), 6);
    let mut symbols: Vec<_> = board.cards().iter().map(|c| c.symbol()).collect();
    symbols.sort_unstable_by_key(|s| s.index());
    symbols.dedup();
    assert_eq!(symbols.len(), 3);

    clear_board(&mut game, &mut view);

    // 3 matches at 100 each, plus max(0, 500 - (3 - 3) * 20) = 500.
    assert_eq!(game.phase(), RoundPhase::Won);
    assert_eq!(game.moves(), 3);
    assert_eq!(game.score(), 800);

    let summary = view.last_win().unwrap();
    assert_eq!(summary.score, 800);
    assert_eq!(summary.moves, 3);
    assert!(summary.under_par);
}

#[test]
fn test_easy_sloppy_round_scores_760() {
    let mut game = engine(42);
    let mut view = RecordingView::new();
    game.start_round("easy", &mut view);

    // Two wasted attempts, then a clean finish: 5 moves total.
    for _ in 0..2 {
        let pair = find_mismatching_pair(&game);
        attempt(&mut game, &mut view, pair);
    }
    assert_eq!(game.score(), 0);
    clear_board(&mut game, &mut view);

    // 3 matches at 100 each, plus max(0, 500 - (5 - 3) * 20) = 460.
    assert_eq!(game.moves(), 5);
    assert_eq!(game.score(), 760);
    assert!(!view.last_win().unwrap().under_par);
}

#[test]
fn test_medium_multiplier_floors_per_match() {
    let mut game = engine(7);
    let mut view = RecordingView::new();
    game.start_round("medium", &mut view);

    let pair = find_matching_pair(&game);
    attempt(&mut game, &mut view, pair);

    // floor(100 * 1.5) = 150 per match.
    assert_eq!(game.score(), 150);

    clear_board(&mut game, &mut view);

    // 6 matches at 150, plus max(0, floor(500 * 1.5) - 0) = 750.
    assert_eq!(game.moves(), 6);
    assert_eq!(game.score(), 6 * 150 + 750);
}

#[test]
fn test_master_perfect_round_scores_6300() {
    let mut game = engine(3);
    let mut view = RecordingView::new();
    game.start_round("master", &mut view);

    assert_eq!(game.board().unwrap().len(), 32);
    clear_board(&mut game, &mut view);

    // 16 matches at floor(100 * 3.0) = 300, bonus floor(500 * 3.0) = 1500.
    assert_eq!(game.score(), 16 * 300 + 1500);
    assert_eq!(view.last_win().unwrap().difficulty, "Master");
}

#[test]
fn test_bonus_never_goes_negative() {
    let mut game = engine(42);
    let mut view = RecordingView::new();
    game.start_round("easy", &mut view);

    // 30 wasted attempts: raw bonus would be 500 - 30 * 20 = -100.
    for _ in 0..30 {
        let pair = find_mismatching_pair(&game);
        attempt(&mut game, &mut view, pair);
    }
    clear_board(&mut game, &mut view);

    assert_eq!(game.moves(), 33);
    // Bonus clamps to 0; only the three matches score.
    assert_eq!(game.score(), 300);
}

#[test]
fn test_score_updates_are_reported_in_order() {
    let mut game = engine(42);
    let mut view = RecordingView::new();
    game.start_round("easy", &mut view);
    clear_board(&mut game, &mut view);

    let scores: Vec<i64> = view
        .events()
        .iter()
        .filter_map(|e| match e {
            ViewEvent::Score(s) => Some(*s),
            _ => None,
        })
        .collect();

    assert_eq!(scores, vec![0, 100, 200, 300, 800]);
}

#[test]
fn test_won_round_replays_from_history() {
    let mut game = engine(11);
    let mut view = RecordingView::new();
    game.start_round("easy", &mut view);

    let pair = find_mismatching_pair(&game);
    attempt(&mut game, &mut view, pair);
    clear_board(&mut game, &mut view);

    let history = game.round().unwrap().history();
    assert_eq!(history.len(), 4);
    assert_eq!(history.iter().filter(|a| a.matched).count(), 3);
    assert_eq!(
        history.iter().map(|a| a.move_number).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
}
