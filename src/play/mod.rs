//! Playing whole games.
//!
//! `Match` owns one board and the turn flag, validates every move and
//! passes the turn unless the mover earned an extra turn. `Player` is the
//! seam for move sources: the searching `AlphaCalaPlayer`, a seeded
//! `RandomPlayer`, or a `ScriptedPlayer` fed by a front end.

mod game;
mod player;

pub use game::{play_game, Match, MatchSummary, PlayError, PlayedMove, DEFAULT_MAX_MOVES};
pub use player::{AlphaCalaPlayer, Player, RandomPlayer, ScriptedPlayer};
