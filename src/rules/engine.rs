//! Rules engine trait and the standard Kalah ruleset.
//!
//! The search calls into `RulesEngine` for everything game-specific:
//! - How a move modifies the board
//! - Which moves are legal
//! - How leaves and finished games are scored

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::board::{Board, Side, PITS_PER_SIDE};

use super::sowing;

/// Legal moves of one side, in scan order.
pub type MoveList = SmallVec<[usize; PITS_PER_SIDE]>;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Side),
    /// Equal stores.
    Draw,
}

impl GameResult {
    /// Decide the result from a board whose pits have been swept.
    #[must_use]
    pub fn from_stores(board: &Board) -> Self {
        match board.store_difference() {
            d if d > 0 => GameResult::Winner(Side::AlphaCala),
            d if d < 0 => GameResult::Winner(Side::Opponent),
            _ => GameResult::Draw,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_move`: may assume the move is legal; must be deterministic
/// - `legal_moves`: scan order decides search tie-breaks
/// - `terminal_score`: called when `to_move` has no legal move
pub trait RulesEngine {
    /// Play a move in place. Returns true when the mover goes again.
    fn apply_move(&self, board: &mut Board, pit_index: usize) -> bool;

    /// Non-empty pits of `side`, in the side's scan order.
    fn legal_moves(&self, board: &Board, side: Side) -> MoveList {
        legal_moves(board, side)
    }

    /// Has the game ended with `to_move` to play?
    fn is_terminal(&self, board: &Board, to_move: Side) -> bool {
        is_terminal(board, to_move)
    }

    /// Static evaluation at the depth limit.
    fn leaf_score(&self, board: &Board) -> i32 {
        board.store_difference()
    }

    /// Evaluation of a finished game.
    fn terminal_score(&self, board: &Board, to_move: Side) -> i32 {
        final_score(board, to_move)
    }
}

/// Standard Kalah: 6 pits, capture on empty own pit, extra turn on own store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Kalah;

impl RulesEngine for Kalah {
    fn apply_move(&self, board: &mut Board, pit_index: usize) -> bool {
        sowing::apply_move(board, pit_index)
    }
}

/// Non-empty pits of `side`, in the side's scan order.
#[must_use]
pub fn legal_moves(board: &Board, side: Side) -> MoveList {
    side.pits().iter().copied().filter(|&i| board[i] > 0).collect()
}

/// The game is over once the side to move has no seeds in its pits.
#[must_use]
pub fn is_terminal(board: &Board, to_move: Side) -> bool {
    board.side_is_empty(to_move)
}

/// Final evaluation when `to_move` cannot move.
///
/// The other side keeps its remaining seeds: they count for that side's
/// store. The board itself is not changed.
#[must_use]
pub fn final_score(board: &Board, to_move: Side) -> i32 {
    let eval = board.store_difference();
    match to_move.opposite() {
        Side::Opponent => eval - board.seeds_on_side(Side::Opponent),
        Side::AlphaCala => eval + board.seeds_on_side(Side::AlphaCala),
    }
}

/// Move every seed left in a side's pits into that side's store.
pub fn sweep(board: &mut Board) {
    for side in [Side::AlphaCala, Side::Opponent] {
        let store = side.store();
        for &pit in side.pits() {
            board[store] += board[pit];
            board[pit] = 0;
        }
    }
}
