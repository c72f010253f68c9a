//! Search integration tests.
//!
//! Alpha-beta is checked against a plain minimax reference on positions
//! reached by random play.

use alphacala::core::{Board, Side, AC_STORE, OPP_STORE};
use alphacala::rules::{apply_move, final_score, is_terminal, legal_moves};
use alphacala::search::{best_move, evaluate, SearchConfig, SearchResult, Searcher, SCORE_BOUND};
use proptest::prelude::*;

// =============================================================================
// Helpers
// =============================================================================

/// Minimax without pruning, same scan order and tie-break.
fn plain_minimax(board: &Board, is_ac_turn: bool, depth: u32) -> SearchResult {
    if depth == 0 {
        return SearchResult {
            score: board.store_difference(),
            best_move: None,
        };
    }

    let side = Side::from_turn(is_ac_turn);
    let mut best: Option<(i32, usize)> = None;

    for pit in legal_moves(board, side) {
        let mut child = *board;
        let go_again = apply_move(&mut child, pit);
        let next_is_ac = if go_again { is_ac_turn } else { !is_ac_turn };
        let score = plain_minimax(&child, next_is_ac, depth - 1).score;

        let better = match best {
            None => true,
            Some((s, _)) if is_ac_turn => score > s,
            Some((s, _)) => score < s,
        };
        if better {
            best = Some((score, pit));
        }
    }

    match best {
        Some((score, pit)) => SearchResult {
            score,
            best_move: Some(pit),
        },
        None => SearchResult {
            score: final_score(board, side),
            best_move: None,
        },
    }
}

/// Play random legal moves from the start; `choices` pick among legal moves.
fn random_position(choices: &[usize]) -> (Board, bool) {
    let mut board = Board::default();
    let mut is_ac_turn = true;

    for &choice in choices {
        let side = Side::from_turn(is_ac_turn);
        if is_terminal(&board, side) {
            break;
        }
        let moves = legal_moves(&board, side);
        let pit = moves[choice % moves.len()];
        if !apply_move(&mut board, pit) {
            is_ac_turn = !is_ac_turn;
        }
    }

    (board, is_ac_turn)
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_depth_zero_ignores_turn_and_contents() {
    let mut board = Board::new(0);
    board[AC_STORE] = 30;
    board[OPP_STORE] = 12;

    for is_ac_turn in [true, false] {
        let result = best_move(&board, is_ac_turn, 0);
        assert_eq!(result, SearchResult { score: 18, best_move: None });
    }
}

#[test]
fn test_no_move_when_side_empty() {
    let mut board = Board::new(0);
    board[AC_STORE] = 25;
    board[OPP_STORE] = 15;
    board[7] = 2;
    board[10] = 6;

    let result = best_move(&board, true, 20);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 25 - 15 - 8);
}

#[test]
fn test_deterministic_results() {
    let board = Board::default();
    let first = best_move(&board, true, 8);

    for _ in 0..3 {
        assert_eq!(best_move(&board, true, 8), first);
    }
}

#[test]
fn test_matches_plain_minimax_from_start() {
    let board = Board::default();
    for depth in 1..=6 {
        for is_ac_turn in [true, false] {
            assert_eq!(
                best_move(&board, is_ac_turn, depth),
                plain_minimax(&board, is_ac_turn, depth),
                "depth {} ac_turn {}",
                depth,
                is_ac_turn
            );
        }
    }
}

#[test]
fn test_pruning_visits_fewer_nodes() {
    let mut searcher = Searcher::new(SearchConfig::default().with_depth(8));
    searcher.search(&Board::default(), true);

    assert!(searcher.stats().cutoffs > 0);
    // Full tree at depth 8 has at least 6^8 leaves without pruning
    assert!(searcher.stats().leaves < 6u64.pow(8));
}

#[test]
fn test_free_evaluate_full_window_matches_search() {
    let board = Board::default();
    assert_eq!(
        evaluate(&board, false, 5, -SCORE_BOUND, SCORE_BOUND),
        best_move(&board, false, 5)
    );
}

#[test]
fn test_endgame_finds_winning_capture() {
    // AlphaCala behind by 3; capturing the 6 seeds in pit 11 wins
    let mut board = Board::new(0);
    board[AC_STORE] = 20;
    board[OPP_STORE] = 23;
    board[0] = 1;
    board[3] = 1;
    board[11] = 6;

    let result = best_move(&board, true, 10);
    assert_eq!(result.best_move, Some(0));
    assert!(result.score > 0);
}

#[test]
fn test_fullest_board_still_reports_move() {
    // 96 seeds, almost all banked by the opponent: the score sits at the
    // edge of the window but the single legal move is still returned
    let mut board = Board::new(0);
    board[5] = 1;
    board[8] = 1;
    board[OPP_STORE] = 94;
    assert!(Board::try_from_cells(*board.cells()).is_ok());

    let result = best_move(&board, true, 1);
    assert_eq!(result.best_move, Some(5));
    assert_eq!(result.score, 1 - 94);
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_alpha_beta_matches_minimax(
        choices in prop::collection::vec(0usize..6, 0..40),
        depth in 0u32..=5,
    ) {
        let (board, is_ac_turn) = random_position(&choices);

        prop_assert_eq!(
            best_move(&board, is_ac_turn, depth),
            plain_minimax(&board, is_ac_turn, depth)
        );
    }

    #[test]
    fn prop_best_move_is_legal(choices in prop::collection::vec(0usize..6, 0..40)) {
        let (board, is_ac_turn) = random_position(&choices);
        let side = Side::from_turn(is_ac_turn);

        let result = best_move(&board, is_ac_turn, 4);

        match result.best_move {
            Some(pit) => prop_assert!(legal_moves(&board, side).contains(&pit)),
            None => prop_assert!(is_terminal(&board, side)),
        }
        prop_assert!(result.score.abs() < SCORE_BOUND);
    }
}
