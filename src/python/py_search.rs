//! Search bindings for Python.

use pyo3::prelude::*;

use crate::core::Side;
use crate::rules::is_terminal;
use crate::search::{self, DEFAULT_DEPTH};

use super::py_board::PyBoard;

/// Best move for the side to move.
///
/// Returns `(score, pit)`; `pit` is None when the side to move has no
/// legal move or `depth` is 0.
#[pyfunction]
#[pyo3(signature = (board, is_ac_turn, depth = DEFAULT_DEPTH))]
pub fn best_move(
    py: Python<'_>,
    board: &PyBoard,
    is_ac_turn: bool,
    depth: u32,
) -> (i32, Option<usize>) {
    let board = board.0;
    let result = py.allow_threads(|| search::best_move(&board, is_ac_turn, depth));
    (result.score, result.best_move)
}

/// True when the side to move has no seeds left.
#[pyfunction]
pub fn is_game_over(board: &PyBoard, is_ac_turn: bool) -> bool {
    is_terminal(&board.0, Side::from_turn(is_ac_turn))
}
