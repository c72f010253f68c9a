//! Depth-limited minimax with alpha-beta pruning.
//!
//! AlphaCala maximizes `store[6] - store[13]`, the opponent minimizes it.
//! An extra turn keeps the same side on move for the next ply, so a chain
//! of store landings is searched as consecutive plies of one side.
//!
//! Moves are scanned in the fixed order `{5,4,3,2,1,0}` for AlphaCala and
//! `{12,11,10,9,8,7}` for the opponent. Only a strictly better score
//! replaces the current best, so earlier pits win ties and the result is
//! fully deterministic.
//!
//! ```
//! use alphacala::core::Board;
//! use alphacala::search::best_move;
//!
//! let result = best_move(&Board::default(), true, 4);
//! assert!(result.best_move.is_some());
//! ```

use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::board::{Board, Side};
use crate::rules::{Kalah, RulesEngine};

use super::config::{SearchConfig, SCORE_BOUND};
use super::stats::SearchStats;

/// Evaluation of a position and the move that achieves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Positive favors AlphaCala, negative favors the opponent.
    pub score: i32,

    /// Best pit for the side to move. `None` at the depth limit or when
    /// the side to move has no legal move (game over).
    pub best_move: Option<usize>,
}

impl SearchResult {
    fn scored(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Alpha-beta searcher.
///
/// Generic over the rules engine. Owns its configuration and the
/// statistics of the last search; never touches the caller's board.
pub struct Searcher<E: RulesEngine = Kalah> {
    /// The game rules engine.
    engine: E,

    /// Search configuration.
    config: SearchConfig,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl Searcher<Kalah> {
    /// Create a searcher for standard Kalah.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_engine(Kalah, config)
    }
}

impl<E: RulesEngine> Searcher<E> {
    /// Create a searcher over a custom rules engine.
    pub fn with_engine(engine: E, config: SearchConfig) -> Self {
        Self {
            engine,
            config,
            stats: SearchStats::default(),
        }
    }

    /// Get the search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the last search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search to the configured depth.
    pub fn search(&mut self, board: &Board, is_ac_turn: bool) -> SearchResult {
        self.search_to_depth(board, is_ac_turn, self.config.depth)
    }

    /// Search to an explicit depth with the full window.
    pub fn search_to_depth(&mut self, board: &Board, is_ac_turn: bool, depth: u32) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();

        let result = self.evaluate(board, is_ac_turn, depth, -SCORE_BOUND, SCORE_BOUND);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "search: side={} depth={} score={} move={:?} nodes={} cutoffs={} time_us={}",
            Side::from_turn(is_ac_turn),
            depth,
            result.score,
            result.best_move,
            self.stats.nodes,
            self.stats.cutoffs,
            self.stats.time_us,
        );

        result
    }

    /// Minimax value of `board` with `is_ac_turn` to move, searched `depth`
    /// plies deep inside the `(alpha, beta)` window.
    ///
    /// Statistics accumulate; `search` resets them.
    pub fn evaluate(
        &mut self,
        board: &Board,
        is_ac_turn: bool,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.leaves += 1;
            return SearchResult::scored(self.engine.leaf_score(board));
        }

        let side = Side::from_turn(is_ac_turn);
        let mut best_score = if is_ac_turn { -SCORE_BOUND } else { SCORE_BOUND };
        let mut best_move = None;

        for pit in self.engine.legal_moves(board, side) {
            let mut child = *board;
            let go_again = self.engine.apply_move(&mut child, pit);
            let next_is_ac = if go_again { is_ac_turn } else { !is_ac_turn };

            let score = self.evaluate(&child, next_is_ac, depth - 1, alpha, beta).score;

            if is_ac_turn {
                if score > best_score {
                    best_score = score;
                    best_move = Some(pit);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(pit);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        match best_move {
            Some(_) => SearchResult {
                score: best_score,
                best_move,
            },
            // No legal move: the game ends here
            None => {
                self.stats.terminals += 1;
                SearchResult::scored(self.engine.terminal_score(board, side))
            }
        }
    }
}

/// Minimax value and best move inside an explicit window, standard rules.
pub fn evaluate(
    board: &Board,
    is_ac_turn: bool,
    depth: u32,
    alpha: i32,
    beta: i32,
) -> SearchResult {
    Searcher::new(SearchConfig::default().with_depth(depth))
        .evaluate(board, is_ac_turn, depth, alpha, beta)
}

/// Best move for the side to move, searched `depth` plies deep.
///
/// `best_move` is `None` when that side has no legal move or `depth` is 0.
pub fn best_move(board: &Board, is_ac_turn: bool, depth: u32) -> SearchResult {
    Searcher::new(SearchConfig::default().with_depth(depth)).search(board, is_ac_turn)
}
