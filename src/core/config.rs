//! Game configuration.
//!
//! The engine never hardcodes who moves first or how many seeds start in
//! each pit. Callers configure these via `GameConfig`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::board::{Board, DEFAULT_START_SEEDS};

/// Largest supported starting seed count.
///
/// Keeps every reachable score inside the default search window.
pub const MAX_START_SEEDS: u8 = 8;

/// Largest number of seeds a board may hold: a full start at `MAX_START_SEEDS`.
pub const MAX_TOTAL_SEEDS: u32 = 12 * MAX_START_SEEDS as u32;

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("start_seeds must be in 1..={max}, got {got}")]
    StartSeeds { got: u8, max: u8 },
    #[error("board holds {got} seeds, at most {max} are supported")]
    TooManySeeds { got: u32, max: u32 },
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seeds placed in each pit at the start (default: 4).
    pub start_seeds: u8,

    /// Does AlphaCala move first? (default: true).
    pub ac_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_seeds: DEFAULT_START_SEEDS,
            ac_first: true,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set seeds per pit.
    #[must_use]
    pub fn with_start_seeds(mut self, seeds: u8) -> Self {
        self.start_seeds = seeds;
        self
    }

    /// Set whether AlphaCala moves first.
    #[must_use]
    pub fn with_ac_first(mut self, ac_first: bool) -> Self {
        self.ac_first = ac_first;
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_seeds == 0 || self.start_seeds > MAX_START_SEEDS {
            return Err(ConfigError::StartSeeds {
                got: self.start_seeds,
                max: MAX_START_SEEDS,
            });
        }
        Ok(())
    }

    /// Build the starting board for this configuration.
    pub fn initial_board(&self) -> Result<Board, ConfigError> {
        self.validate()?;
        Ok(Board::new(self.start_seeds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.start_seeds, 4);
        assert!(config.ac_first);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new().with_start_seeds(3).with_ac_first(false);
        assert_eq!(config.start_seeds, 3);
        assert!(!config.ac_first);

        let board = config.initial_board().unwrap();
        assert_eq!(board.total_seeds(), 36);
    }

    #[test]
    fn test_invalid_start_seeds() {
        let err = GameConfig::new().with_start_seeds(0).validate().unwrap_err();
        assert_eq!(err, ConfigError::StartSeeds { got: 0, max: 8 });

        let err = GameConfig::new().with_start_seeds(9).initial_board().unwrap_err();
        assert_eq!(err.to_string(), "start_seeds must be in 1..=8, got 9");
    }

    #[test]
    fn test_max_total_seeds_matches_full_start() {
        let board = GameConfig::new()
            .with_start_seeds(MAX_START_SEEDS)
            .initial_board()
            .unwrap();
        assert_eq!(board.total_seeds(), MAX_TOTAL_SEEDS);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new().with_ac_first(false);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
