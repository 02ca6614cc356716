//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Depth limit in plies (single-player turns). Values below 1 search 1 ply.
    pub ply_limit: u32,

    /// Seed for agents that sample moves.
    /// Same seed produces the same sequence of random moves.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            ply_limit: 3,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom ply limit.
    pub fn with_ply_limit(mut self, ply_limit: u32) -> Self {
        self.ply_limit = ply_limit;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Ply limit actually searched.
    #[must_use]
    pub fn effective_ply_limit(&self) -> u32 {
        self.ply_limit.max(1)
    }
}
