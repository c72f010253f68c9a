//! Board representation and pit index utilities.
//!
//! ## Layout
//!
//! A board is 14 cells addressed by index:
//!
//! ```text
//!   13
//! 00  12
//! 01  11
//! 02  10
//! 03  09
//! 04  08
//! 05  07
//!   06
//! ```
//!
//! - `0..=5`: AlphaCala's pits, `6`: AlphaCala's store
//! - `7..=12`: opponent's pits, `13`: opponent's store
//!
//! Pit `i` faces pit `12 - i`. The `Display` impl prints exactly this
//! diamond with every cell as two zero-padded digits.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::{ConfigError, MAX_TOTAL_SEEDS};

/// Number of cells on the board (12 pits + 2 stores).
pub const NUM_CELLS: usize = 14;

/// Pits per side.
pub const PITS_PER_SIDE: usize = 6;

/// AlphaCala's store index.
pub const AC_STORE: usize = 6;

/// Opponent's store index.
pub const OPP_STORE: usize = 13;

/// Seeds per pit at the start of a standard game.
pub const DEFAULT_START_SEEDS: u8 = 4;

/// AlphaCala's pits in search scan order. Earlier pits win ties.
pub const AC_PITS: [usize; PITS_PER_SIDE] = [5, 4, 3, 2, 1, 0];

/// Opponent's pits in search scan order. Earlier pits win ties.
pub const OPP_PITS: [usize; PITS_PER_SIDE] = [12, 11, 10, 9, 8, 7];

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The searching side, owning pits 0-5 and store 6.
    AlphaCala,
    /// The other side, owning pits 7-12 and store 13.
    Opponent,
}

impl Side {
    /// Side owning the given pit index (`<= 5` is AlphaCala).
    #[must_use]
    pub const fn of_pit(pit_index: usize) -> Self {
        if pit_index <= 5 {
            Side::AlphaCala
        } else {
            Side::Opponent
        }
    }

    /// Side to move given the "is AlphaCala's turn" flag.
    #[must_use]
    pub const fn from_turn(is_ac_turn: bool) -> Self {
        if is_ac_turn {
            Side::AlphaCala
        } else {
            Side::Opponent
        }
    }

    #[must_use]
    pub const fn is_alphacala(self) -> bool {
        matches!(self, Side::AlphaCala)
    }

    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::AlphaCala => Side::Opponent,
            Side::Opponent => Side::AlphaCala,
        }
    }

    /// This side's store index.
    #[must_use]
    pub const fn store(self) -> usize {
        match self {
            Side::AlphaCala => AC_STORE,
            Side::Opponent => OPP_STORE,
        }
    }

    /// This side's pits in fixed scan order.
    #[must_use]
    pub const fn pits(self) -> &'static [usize; PITS_PER_SIDE] {
        match self {
            Side::AlphaCala => &AC_PITS,
            Side::Opponent => &OPP_PITS,
        }
    }

    /// Check whether a cell index is one of this side's sowing pits.
    #[must_use]
    pub const fn owns_pit(self, index: usize) -> bool {
        match self {
            Side::AlphaCala => index <= 5,
            Side::Opponent => index >= 7 && index <= 12,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::AlphaCala => write!(f, "AlphaCala"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Next cell to drop a seed into, skipping the opposing player's store.
///
/// An AlphaCala mover wraps from 12 straight to 0; an opponent mover
/// jumps from 5 to 7.
#[must_use]
pub const fn next_pit_index(pit_index: usize, is_mover_ac: bool) -> usize {
    if pit_index == 12 && is_mover_ac {
        return 0;
    }
    if pit_index == 5 && !is_mover_ac {
        return 7;
    }
    (pit_index + 1) % NUM_CELLS
}

/// Pit facing the given sowing pit across the board.
#[must_use]
pub const fn facing_pit(pit_index: usize) -> usize {
    12 - pit_index
}

/// Check whether an index is a store.
#[must_use]
pub const fn is_store(index: usize) -> bool {
    index == AC_STORE || index == OPP_STORE
}

/// Pit index for a human opponent's row choice (`0..=5`).
///
/// Rows are counted top to bottom in the diamond layout, so row 0 is
/// pit 12.
#[must_use]
pub const fn pit_for_row(row: usize) -> usize {
    12 - row
}

/// A Kalah board: 12 pits and 2 stores.
///
/// `Copy`, so every search node gets its own independent board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [u8; NUM_CELLS],
}

impl Board {
    /// Create a starting board with `start_seeds` in every pit and empty stores.
    #[must_use]
    pub fn new(start_seeds: u8) -> Self {
        let mut cells = [0; NUM_CELLS];
        for &i in AC_PITS.iter().chain(OPP_PITS.iter()) {
            cells[i] = start_seeds;
        }
        Self { cells }
    }

    /// Create a board from raw cell values.
    ///
    /// Nothing is checked. Boards holding more than `MAX_TOTAL_SEEDS` can
    /// overflow a cell while sowing and fall outside the search window; use
    /// `try_from_cells` for untrusted input.
    #[must_use]
    pub const fn from_cells(cells: [u8; NUM_CELLS]) -> Self {
        Self { cells }
    }

    /// Create a board from raw cell values, rejecting oversized totals.
    pub fn try_from_cells(cells: [u8; NUM_CELLS]) -> Result<Self, ConfigError> {
        let board = Self { cells };
        board.validate()?;
        Ok(board)
    }

    /// Check the board holds no more than `MAX_TOTAL_SEEDS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let total = self.total_seeds();
        if total > MAX_TOTAL_SEEDS {
            return Err(ConfigError::TooManySeeds {
                got: total,
                max: MAX_TOTAL_SEEDS,
            });
        }
        Ok(())
    }

    /// Raw cell values.
    #[must_use]
    pub const fn cells(&self) -> &[u8; NUM_CELLS] {
        &self.cells
    }

    /// Seeds banked in a side's store.
    #[must_use]
    pub fn store(&self, side: Side) -> u8 {
        self.cells[side.store()]
    }

    /// A side's six pit values in scan order.
    pub fn pits(&self, side: Side) -> impl Iterator<Item = u8> + '_ {
        side.pits().iter().map(move |&i| self.cells[i])
    }

    /// Seeds still in play on a side (excluding its store).
    #[must_use]
    pub fn seeds_on_side(&self, side: Side) -> i32 {
        self.pits(side).map(i32::from).sum()
    }

    /// Check whether a side has no seeds left in its pits.
    #[must_use]
    pub fn side_is_empty(&self, side: Side) -> bool {
        self.pits(side).all(|s| s == 0)
    }

    /// Total seeds on the board, stores included.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.cells.iter().map(|&s| u32::from(s)).sum()
    }

    /// AlphaCala's store minus the opponent's store.
    #[must_use]
    pub fn store_difference(&self) -> i32 {
        i32::from(self.cells[AC_STORE]) - i32::from(self.cells[OPP_STORE])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_START_SEEDS)
    }
}

impl Index<usize> for Board {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.cells[index]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.cells[index]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  {:02}", self.cells[OPP_STORE])?;
        for i in 0..PITS_PER_SIDE {
            writeln!(f, "{:02}  {:02}", self.cells[i], self.cells[facing_pit(i)])?;
        }
        writeln!(f, "  {:02}", self.cells[AC_STORE])
    }
}
