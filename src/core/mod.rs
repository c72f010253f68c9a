//! Core types: board, sides, pit indices, configuration, RNG.
//!
//! Nothing here knows how a move is played. The rules live in `rules`.

pub mod board;
pub mod config;
pub mod rng;

pub use board::{
    facing_pit, is_store, next_pit_index, pit_for_row, Board, Side, AC_PITS, AC_STORE,
    DEFAULT_START_SEEDS, NUM_CELLS, OPP_PITS, OPP_STORE, PITS_PER_SIDE,
};
pub use config::{ConfigError, GameConfig, MAX_START_SEEDS, MAX_TOTAL_SEEDS};
pub use rng::GameRng;
