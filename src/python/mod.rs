//! Python bindings for the AlphaCala engine.
//!
//! # Quick Start
//!
//! ```python
//! import alphacala
//!
//! board = alphacala.Board()
//! extra_turn = board.apply_move(2, alphacala=True)
//!
//! score, pit = alphacala.best_move(board, is_ac_turn=True, depth=12)
//! print(board)
//! ```

use pyo3::prelude::*;

mod py_board;
mod py_search;

pub use py_board::*;
pub use py_search::*;

/// alphacala: Kalah rules engine and alpha-beta search.
#[pymodule]
fn alphacala(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoard>()?;
    m.add_function(wrap_pyfunction!(best_move, m)?)?;
    m.add_function(wrap_pyfunction!(is_game_over, m)?)?;
    Ok(())
}
