//! Board bindings for Python.

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Board, GameConfig, Side, DEFAULT_START_SEEDS, NUM_CELLS};
use crate::rules::{legal_moves, try_apply_move};

/// Python wrapper for Board.
///
/// Moves are validated; illegal moves raise `ValueError`.
#[pyclass(name = "Board")]
#[derive(Clone, Debug)]
pub struct PyBoard(pub Board);

#[pymethods]
impl PyBoard {
    /// Create a starting board.
    ///
    /// # Arguments
    /// - start_seeds: Seeds per pit (1-8)
    #[new]
    #[pyo3(signature = (start_seeds = DEFAULT_START_SEEDS))]
    fn new(start_seeds: u8) -> PyResult<Self> {
        GameConfig::new()
            .with_start_seeds(start_seeds)
            .initial_board()
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Create a board from 14 raw cell values.
    ///
    /// Raises `ValueError` for the wrong length or more than 96 seeds.
    #[staticmethod]
    fn from_cells(cells: Vec<u8>) -> PyResult<Self> {
        let cells: [u8; NUM_CELLS] = cells.try_into().map_err(|v: Vec<u8>| {
            PyValueError::new_err(format!("expected {} cells, got {}", NUM_CELLS, v.len()))
        })?;
        Board::try_from_cells(cells)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Raw cell values.
    fn cells(&self) -> Vec<u8> {
        self.0.cells().to_vec()
    }

    /// Play a pit for one side. Returns True when that side goes again.
    #[pyo3(signature = (pit, alphacala))]
    fn apply_move(&mut self, pit: usize, alphacala: bool) -> PyResult<bool> {
        try_apply_move(&mut self.0, pit, Side::from_turn(alphacala))
            .map(|outcome| outcome.extra_turn)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Non-empty pits of one side, in search scan order.
    fn legal_moves(&self, alphacala: bool) -> Vec<usize> {
        legal_moves(&self.0, Side::from_turn(alphacala)).to_vec()
    }

    /// AlphaCala's store minus the opponent's store.
    fn store_difference(&self) -> i32 {
        self.0.store_difference()
    }

    /// Copy the board.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __getitem__(&self, index: usize) -> PyResult<u8> {
        self.0
            .cells()
            .get(index)
            .copied()
            .ok_or_else(|| PyIndexError::new_err(format!("cell {} out of range", index)))
    }

    fn __len__(&self) -> usize {
        NUM_CELLS
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        self.0.to_string()
    }
}
