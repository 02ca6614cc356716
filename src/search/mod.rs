//! Game-tree search agents for Push.
//!
//! ## Overview
//!
//! - **Random**: uniform edge and index, seeded for reproducibility
//! - **Minimax**: full tree to a fixed ply limit
//! - **Alpha-beta**: same tree and result as minimax, fewer nodes
//!
//! Each decision builds a fresh search context, so agents carry no bounds or
//! other search state between moves or games.
//!
//! ## Usage
//!
//! ```rust
//! use rust_push::core::{Board, GameRng, Player};
//! use rust_push::rules::{History, PushRules};
//! use rust_push::search::{choose_move, AgentKind};
//!
//! let rules = PushRules::with_board_size(3);
//! let mut rng = GameRng::new(42);
//! let action = choose_move(
//!     AgentKind::AlphaBeta,
//!     &rules,
//!     &Board::new(3),
//!     Player::X,
//!     2,
//!     &History::new(),
//!     &mut rng,
//! );
//! assert!(action.is_some());
//! ```

pub mod agent;
pub mod alphabeta;
pub mod config;
pub mod minimax;
pub mod random;
pub mod stats;
pub mod utility;

use serde::{Deserialize, Serialize};

use crate::core::Action;

// Re-export main types
pub use agent::{choose_move, Agent, AgentKind, AlphaBetaAgent, MinimaxAgent, ParseAgentKindError};
pub use alphabeta::AlphaBeta;
pub use config::SearchConfig;
pub use minimax::Minimax;
pub use random::RandomAgent;
pub use stats::SearchStats;
pub use utility::{utility, LOSS_SCORE, WIN_SCORE};

/// Outcome of one search decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best action found.
    pub action: Action,
    /// Its value for the searching player.
    pub value: i32,
    /// Work done to find it.
    pub stats: SearchStats,
}
