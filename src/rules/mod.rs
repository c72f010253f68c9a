//! Kalah rules: sowing, captures, extra turns, end of game.
//!
//! `sowing` holds the state transition itself; `engine` wraps it in the
//! `RulesEngine` trait the search is generic over, plus the end-of-game
//! helpers.

pub mod engine;
pub mod sowing;

pub use engine::{
    final_score, is_terminal, legal_moves, sweep, GameResult, Kalah, MoveList, RulesEngine,
};
pub use sowing::{apply_move, sow, try_apply_move, validate_move, MoveOutcome, RulesError};
