//! Sowing: the single state transition of Kalah.
//!
//! A move picks up every seed in one of the mover's pits and drops them
//! one at a time into the following cells, skipping the opposing store.
//! Where the last seed lands decides what happens next:
//!
//! - Mover's store: the mover goes again.
//! - Empty pit on the mover's side facing a non-empty pit: capture. The
//!   last seed and the facing pit's seeds all go to the mover's store.
//! - Anywhere else: the seed stays where it landed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::board::{facing_pit, is_store, next_pit_index, Board, Side, NUM_CELLS};

/// What a move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The mover plays again.
    pub extra_turn: bool,

    /// Cell the last seed landed on.
    pub landing_pit: usize,

    /// Seeds taken from the facing pit, if the move captured.
    ///
    /// The mover's store gained this plus the landing seed.
    pub captured: Option<u8>,
}

/// A move rejected by `try_apply_move`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("pit index {pit} is out of range")]
    PitOutOfRange { pit: usize },
    #[error("cell {pit} is a store and cannot be played")]
    StoreNotPlayable { pit: usize },
    #[error("pit {pit} does not belong to {side}")]
    WrongSide { pit: usize, side: Side },
    #[error("pit {pit} is empty")]
    EmptyPit { pit: usize },
}

/// Play a move, mutating the board. Returns true when the mover goes again.
///
/// The pit must be a non-empty sowing pit; nothing is checked. The mover is
/// inferred from the pit index.
pub fn apply_move(board: &mut Board, pit_index: usize) -> bool {
    sow(board, pit_index).extra_turn
}

/// Play a move after checking it is legal for `side`.
pub fn try_apply_move(
    board: &mut Board,
    pit_index: usize,
    side: Side,
) -> Result<MoveOutcome, RulesError> {
    validate_move(board, pit_index, side)?;
    Ok(sow(board, pit_index))
}

/// Check a move without playing it.
pub fn validate_move(board: &Board, pit_index: usize, side: Side) -> Result<(), RulesError> {
    if pit_index >= NUM_CELLS {
        return Err(RulesError::PitOutOfRange { pit: pit_index });
    }
    if is_store(pit_index) {
        return Err(RulesError::StoreNotPlayable { pit: pit_index });
    }
    if !side.owns_pit(pit_index) {
        return Err(RulesError::WrongSide {
            pit: pit_index,
            side,
        });
    }
    if board[pit_index] == 0 {
        return Err(RulesError::EmptyPit { pit: pit_index });
    }
    Ok(())
}

/// Play a move and report what happened. Same contract as `apply_move`.
pub fn sow(board: &mut Board, pit_index: usize) -> MoveOutcome {
    let mover = Side::of_pit(pit_index);
    let is_ac_move = mover.is_alphacala();

    let mut num_seeds = board[pit_index];
    board[pit_index] = 0;

    // All but the last seed are dropped unconditionally
    let mut cursor = pit_index;
    while num_seeds > 1 {
        cursor = next_pit_index(cursor, is_ac_move);
        board[cursor] += 1;
        num_seeds -= 1;
    }

    cursor = next_pit_index(cursor, is_ac_move);

    if is_store(cursor) {
        board[cursor] += 1;
        return MoveOutcome {
            extra_turn: true,
            landing_pit: cursor,
            captured: None,
        };
    }

    if board[cursor] == 0 && mover.owns_pit(cursor) {
        let facing = facing_pit(cursor);
        let taken = board[facing];

        if taken > 0 {
            board[mover.store()] += 1 + taken;
            board[facing] = 0;

            return MoveOutcome {
                extra_turn: false,
                landing_pit: cursor,
                captured: Some(taken),
            };
        }
    }

    board[cursor] += 1;
    MoveOutcome {
        extra_turn: false,
        landing_pit: cursor,
        captured: None,
    }
}
