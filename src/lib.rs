//! # alphacala
//!
//! Kalah (6 pits per side, 4 seeds per pit) with an alpha-beta minimax
//! player, AlphaCala.
//!
//! ## Board Layout
//!
//! ```text
//!   13          opponent's store
//! 00  12
//! 01  11        AlphaCala's pits 0-5 face the opponent's pits 12-7
//! ...
//! 05  07
//!   06          AlphaCala's store
//! ```
//!
//! ## Entry Points
//!
//! - [`apply_move`]: play a pit in place, returns whether the mover goes again
//! - [`best_move`]: search a position, returns evaluation and best pit
//!
//! ```
//! use alphacala::{apply_move, best_move, Board};
//!
//! let mut board = Board::default();
//! let mut is_ac_turn = true;
//!
//! let result = best_move(&board, is_ac_turn, 6);
//! if let Some(pit) = result.best_move {
//!     let go_again = apply_move(&mut board, pit);
//!     if !go_again {
//!         is_ac_turn = !is_ac_turn;
//!     }
//! }
//! # let _ = is_ac_turn;
//! ```
//!
//! ## Modules
//!
//! - `core`: board, sides, pit indices, configuration, RNG
//! - `rules`: sowing, captures, extra turns, end of game
//! - `search`: depth-limited alpha-beta minimax
//! - `play`: players and full matches
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod play;
pub mod rules;
pub mod search;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    facing_pit, next_pit_index, Board, ConfigError, GameConfig, GameRng, Side, AC_STORE,
    OPP_STORE,
};

pub use crate::rules::{
    apply_move, try_apply_move, GameResult, Kalah, MoveOutcome, RulesEngine, RulesError,
};

pub use crate::search::{best_move, evaluate, SearchConfig, SearchResult, SearchStats, Searcher};

pub use crate::play::{
    AlphaCalaPlayer, Match, MatchSummary, PlayError, Player, RandomPlayer, ScriptedPlayer,
};
