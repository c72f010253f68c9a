//! Move sources for a `Match`.
//!
//! - `AlphaCalaPlayer`: alpha-beta search
//! - `RandomPlayer`: uniform over legal moves, seeded
//! - `ScriptedPlayer`: a fixed list of moves (scripted or human input)

use std::collections::VecDeque;

use crate::core::board::{pit_for_row, Board, Side};
use crate::core::rng::GameRng;
use crate::rules::legal_moves;
use crate::search::{SearchConfig, SearchResult, Searcher};

/// Anything that can pick a move for a side.
pub trait Player: Send {
    /// Pick a pit to play for `side`.
    ///
    /// Returns `None` if the player has nothing to offer (no legal move,
    /// or a script that ran out).
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<usize>;
}

/// Plays the searched best move.
pub struct AlphaCalaPlayer {
    searcher: Searcher,
    last_result: Option<SearchResult>,
}

impl AlphaCalaPlayer {
    /// Create a searching player.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
            last_result: None,
        }
    }

    /// Result of the most recent search, with its evaluation.
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    /// The underlying searcher (for stats).
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }
}

impl Default for AlphaCalaPlayer {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Player for AlphaCalaPlayer {
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<usize> {
        let result = self.searcher.search(board, side.is_alphacala());
        self.last_result = Some(result);
        result.best_move
    }
}

/// Picks uniformly among legal moves.
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a random player with its own seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a random player on a fork of `rng`.
    pub fn from_rng(rng: &mut GameRng) -> Self {
        Self { rng: rng.fork() }
    }
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<usize> {
        let moves = legal_moves(board, side);
        self.rng.choose(&moves).copied()
    }
}

/// Replays a fixed sequence of pits, one per call.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPlayer {
    moves: VecDeque<usize>,
}

impl ScriptedPlayer {
    /// Script of raw pit indices.
    pub fn new(moves: impl IntoIterator<Item = usize>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Script of opponent rows (`0..=5`, top to bottom), as typed by a human.
    pub fn from_rows(rows: impl IntoIterator<Item = usize>) -> Self {
        Self::new(rows.into_iter().map(pit_for_row))
    }

    /// Moves not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for ScriptedPlayer {
    fn choose_move(&mut self, _board: &Board, _side: Side) -> Option<usize> {
        self.moves.pop_front()
    }
}
