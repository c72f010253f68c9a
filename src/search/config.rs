//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Bound of the alpha-beta window. Every reachable score is strictly inside
/// `(-SCORE_BOUND, SCORE_BOUND)`.
pub const SCORE_BOUND: i32 = 99;

/// Plies searched per move in a standard game.
pub const DEFAULT_DEPTH: u32 = 20;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies to search below the root (default: 20).
    /// Extra turns count as plies too.
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}
