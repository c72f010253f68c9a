//! A single game: the board, whose turn it is, and the moves so far.

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::board::{Board, Side};
use crate::core::config::{ConfigError, GameConfig};
use crate::rules::{
    sweep, try_apply_move, GameResult, Kalah, MoveList, MoveOutcome, RulesEngine, RulesError,
};

use super::player::Player;

/// Default cap on moves in `Match::run`.
pub const DEFAULT_MAX_MOVES: usize = 500;

/// Why a match could not be played to the end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error(transparent)]
    Rules(#[from] RulesError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{side} has legal moves but chose none")]
    NoMoveChosen { side: Side },
    #[error("game not finished after {limit} moves")]
    MoveLimit { limit: usize },
}

/// One applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub side: Side,
    pub pit: usize,
    pub outcome: MoveOutcome,
}

/// How a finished match went.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub result: GameResult,
    /// Board after the end-of-game sweep.
    pub final_board: Board,
    pub moves: Vec<PlayedMove>,
}

/// Owns the board and turn flag for one game.
///
/// Every move is validated, and the turn only passes when the mover did
/// not earn an extra turn.
#[derive(Clone, Debug)]
pub struct Match {
    board: Board,
    is_ac_turn: bool,
    moves: Vec<PlayedMove>,
}

impl Match {
    /// Start a game from a configuration.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let board = config.initial_board()?;
        Self::with_board(board, config.ac_first)
    }

    /// Resume from an arbitrary position.
    ///
    /// Boards holding more than `MAX_TOTAL_SEEDS` are rejected.
    pub fn with_board(board: Board, is_ac_turn: bool) -> Result<Self, ConfigError> {
        board.validate()?;
        Ok(Self {
            board,
            is_ac_turn,
            moves: Vec::new(),
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn is_ac_turn(&self) -> bool {
        self.is_ac_turn
    }

    #[must_use]
    pub fn side_to_move(&self) -> Side {
        Side::from_turn(self.is_ac_turn)
    }

    /// Moves played so far.
    #[must_use]
    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    /// Legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        Kalah.legal_moves(&self.board, self.side_to_move())
    }

    /// The side to move has no seeds left.
    #[must_use]
    pub fn is_over(&self) -> bool {
        Kalah.is_terminal(&self.board, self.side_to_move())
    }

    /// Play a pit for the side to move.
    ///
    /// Illegal moves are rejected and leave the match unchanged.
    pub fn play(&mut self, pit: usize) -> Result<MoveOutcome, RulesError> {
        let side = self.side_to_move();
        let outcome = try_apply_move(&mut self.board, pit, side)?;

        info!(
            "{} plays {} (landing={}, extra_turn={}, captured={:?})",
            side, pit, outcome.landing_pit, outcome.extra_turn, outcome.captured
        );

        if !outcome.extra_turn {
            self.is_ac_turn = !self.is_ac_turn;
        }
        self.moves.push(PlayedMove { side, pit, outcome });

        Ok(outcome)
    }

    /// Sweep remaining seeds into their owners' stores and score the game.
    pub fn finish(&mut self) -> GameResult {
        sweep(&mut self.board);
        let result = GameResult::from_stores(&self.board);
        info!(
            "game over after {} moves: {:?} ({} - {})",
            self.moves.len(),
            result,
            self.board.store(Side::AlphaCala),
            self.board.store(Side::Opponent)
        );
        result
    }

    /// Let two players finish the game.
    pub fn run(
        mut self,
        alphacala: &mut dyn Player,
        opponent: &mut dyn Player,
        max_moves: usize,
    ) -> Result<MatchSummary, PlayError> {
        let mut played = 0;

        while !self.is_over() {
            if played == max_moves {
                return Err(PlayError::MoveLimit { limit: max_moves });
            }

            let side = self.side_to_move();
            let player: &mut dyn Player = match side {
                Side::AlphaCala => &mut *alphacala,
                Side::Opponent => &mut *opponent,
            };

            let pit = player
                .choose_move(&self.board, side)
                .ok_or(PlayError::NoMoveChosen { side })?;
            self.play(pit)?;
            played += 1;
        }

        let result = self.finish();
        Ok(MatchSummary {
            result,
            final_board: self.board,
            moves: self.moves,
        })
    }
}

/// Play a full game from a configuration.
pub fn play_game(
    config: &GameConfig,
    alphacala: &mut dyn Player,
    opponent: &mut dyn Player,
) -> Result<MatchSummary, PlayError> {
    Match::new(config)?.run(alphacala, opponent, DEFAULT_MAX_MOVES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::{AC_STORE, OPP_STORE};
    use crate::play::player::ScriptedPlayer;

    #[test]
    fn test_new_match() {
        let m = Match::new(&GameConfig::default()).unwrap();
        assert!(m.is_ac_turn());
        assert_eq!(m.board().total_seeds(), 48);
        assert_eq!(m.legal_moves().len(), 6);
        assert!(!m.is_over());

        let err = Match::new(&GameConfig::new().with_start_seeds(0)).unwrap_err();
        assert_eq!(err, ConfigError::StartSeeds { got: 0, max: 8 });
    }

    #[test]
    fn test_extra_turn_keeps_turn() {
        let mut m = Match::new(&GameConfig::default()).unwrap();

        let outcome = m.play(2).unwrap();
        assert!(outcome.extra_turn);
        assert!(m.is_ac_turn());

        let outcome = m.play(5).unwrap();
        assert!(!outcome.extra_turn);
        assert!(!m.is_ac_turn());
        assert_eq!(m.moves().len(), 2);
        assert_eq!(m.moves()[1].side, Side::AlphaCala);
    }

    #[test]
    fn test_illegal_move_rejected() {
        let mut m = Match::new(&GameConfig::default().with_ac_first(false)).unwrap();
        let before = *m.board();

        assert_eq!(
            m.play(3),
            Err(RulesError::WrongSide {
                pit: 3,
                side: Side::Opponent
            })
        );
        assert_eq!(*m.board(), before);
        assert!(!m.is_ac_turn());
        assert!(m.moves().is_empty());
    }

    #[test]
    fn test_finish_sweeps() {
        let mut board = Board::new(0);
        board[AC_STORE] = 20;
        board[OPP_STORE] = 22;
        board[0] = 3;
        board[8] = 3;

        let mut m = Match::with_board(board, true).unwrap();
        m.play(0).unwrap();
        // 1, 2, 3: plain landing, opponent to move
        assert!(!m.is_over());

        let result = m.finish();
        assert_eq!(result, GameResult::Winner(Side::Opponent));
        assert_eq!(m.board()[AC_STORE], 23);
        assert_eq!(m.board()[OPP_STORE], 25);
    }

    #[test]
    fn test_run_scripted_until_over() {
        let mut board = Board::new(0);
        board[5] = 1;
        board[7] = 1;
        board[AC_STORE] = 3;

        let mut ac = ScriptedPlayer::new([5]);
        let mut opp = ScriptedPlayer::default();

        // AlphaCala banks its last seed, gets another turn with nothing left
        let summary = Match::with_board(board, true)
            .unwrap()
            .run(&mut ac, &mut opp, 10)
            .unwrap();

        assert_eq!(summary.moves.len(), 1);
        assert_eq!(summary.final_board[AC_STORE], 4);
        assert_eq!(summary.final_board[OPP_STORE], 1);
        assert_eq!(summary.result, GameResult::Winner(Side::AlphaCala));
    }

    #[test]
    fn test_with_board_rejects_oversized_board() {
        let mut board = Board::new(0);
        board[5] = 1;
        board[8] = 1;
        board[OPP_STORE] = 120;

        let err = Match::with_board(board, true).unwrap_err();
        assert_eq!(err, ConfigError::TooManySeeds { got: 122, max: 96 });
    }

    #[test]
    fn test_run_no_move_chosen() {
        let mut ac = ScriptedPlayer::default();
        let mut opp = ScriptedPlayer::default();
        let err = Match::new(&GameConfig::default())
            .unwrap()
            .run(&mut ac, &mut opp, 10)
            .unwrap_err();
        assert_eq!(err, PlayError::NoMoveChosen { side: Side::AlphaCala });
    }

    #[test]
    fn test_run_illegal_scripted_move() {
        let mut ac = ScriptedPlayer::new([6]);
        let mut opp = ScriptedPlayer::default();
        let err = Match::new(&GameConfig::default())
            .unwrap()
            .run(&mut ac, &mut opp, 10)
            .unwrap_err();
        assert_eq!(err, PlayError::Rules(RulesError::StoreNotPlayable { pit: 6 }));
    }

    #[test]
    fn test_run_move_limit() {
        let mut ac = ScriptedPlayer::new([5, 4]);
        let mut opp = ScriptedPlayer::new([12]);
        let err = Match::new(&GameConfig::default())
            .unwrap()
            .run(&mut ac, &mut opp, 1)
            .unwrap_err();
        assert_eq!(err, PlayError::MoveLimit { limit: 1 });
    }
}
