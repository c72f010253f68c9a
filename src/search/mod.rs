//! Game-tree search for AlphaCala.
//!
//! ## Overview
//!
//! Plain minimax with alpha-beta pruning to a fixed depth:
//!
//! - **Deterministic**: fixed pit scan order, no randomness, no time limit
//! - **Copy per node**: every child works on its own copy of the board
//! - **Generic**: works over any `RulesEngine`, standard Kalah by default
//!
//! ## Usage
//!
//! ```rust
//! use alphacala::core::Board;
//! use alphacala::search::{SearchConfig, Searcher};
//!
//! let mut searcher = Searcher::new(SearchConfig::default().with_depth(8));
//! let result = searcher.search(&Board::default(), true);
//!
//! if let Some(pit) = result.best_move {
//!     println!("AlphaCala plays {} (eval = {})", pit, result.score);
//! }
//! println!("{} nodes", searcher.stats().nodes);
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

pub use config::{SearchConfig, DEFAULT_DEPTH, SCORE_BOUND};
pub use minimax::{best_move, evaluate, SearchResult, Searcher};
pub use stats::SearchStats;
