//! Agent trait, the search-backed agents, and one-shot move selection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, GameRng, Player};
use crate::rules::{History, RulesEngine};

use super::alphabeta::AlphaBeta;
use super::config::SearchConfig;
use super::minimax::Minimax;
use super::random::RandomAgent;
use super::stats::SearchStats;

/// Something that picks a move for the player to move.
pub trait Agent {
    /// Choose an action for `player` on `board`.
    ///
    /// Returns `None` only when the board offers no actions.
    fn select_action(&mut self, board: &Board, player: Player, history: &History) -> Option<Action>;

    /// Display name for logs and tallies.
    fn name(&self) -> &str;
}

/// Which search strategy to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Random,
    Minimax,
    AlphaBeta,
}

impl AgentKind {
    pub const ALL: [AgentKind; 3] = [AgentKind::Random, AgentKind::Minimax, AgentKind::AlphaBeta];

    /// Build a boxed agent of this kind.
    pub fn build<E>(self, rules: E, config: &SearchConfig) -> Box<dyn Agent>
    where
        E: RulesEngine + 'static,
    {
        match self {
            AgentKind::Random => Box::new(RandomAgent::new(config.seed)),
            AgentKind::Minimax => Box::new(MinimaxAgent::new(rules, config.clone())),
            AgentKind::AlphaBeta => Box::new(AlphaBetaAgent::new(rules, config.clone())),
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AgentKind::Random => "random",
            AgentKind::Minimax => "minimax",
            AgentKind::AlphaBeta => "alphabeta",
        };
        write!(f, "{name}")
    }
}

/// Unknown agent kind name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown agent kind {0:?} (expected random, minimax or alphabeta)")]
pub struct ParseAgentKindError(pub String);

impl FromStr for AgentKind {
    type Err = ParseAgentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(AgentKind::Random),
            "minimax" => Ok(AgentKind::Minimax),
            "alphabeta" | "alpha-beta" => Ok(AgentKind::AlphaBeta),
            _ => Err(ParseAgentKindError(s.to_string())),
        }
    }
}

/// Pick a move with the given strategy.
///
/// `rng` is only drawn from by the random strategy.
pub fn choose_move<E: RulesEngine>(
    kind: AgentKind,
    rules: &E,
    board: &Board,
    player: Player,
    ply_limit: u32,
    history: &History,
    rng: &mut GameRng,
) -> Option<Action> {
    match kind {
        AgentKind::Random => RandomAgent::sample(rng, board.size()),
        AgentKind::Minimax => Minimax::new(rules, history, ply_limit)
            .search(board, player)
            .map(|r| r.action),
        AgentKind::AlphaBeta => AlphaBeta::new(rules, history, ply_limit)
            .search(board, player)
            .map(|r| r.action),
    }
}

/// Agent backed by plain minimax.
pub struct MinimaxAgent<E: RulesEngine> {
    rules: E,
    config: SearchConfig,
    last_stats: SearchStats,
}

impl<E: RulesEngine> MinimaxAgent<E> {
    pub fn new(rules: E, config: SearchConfig) -> Self {
        Self {
            rules,
            config,
            last_stats: SearchStats::default(),
        }
    }

    /// Statistics of the most recent decision.
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }
}

impl<E: RulesEngine> Agent for MinimaxAgent<E> {
    fn select_action(&mut self, board: &Board, player: Player, history: &History) -> Option<Action> {
        let result = Minimax::new(&self.rules, history, self.config.effective_ply_limit())
            .search(board, player)?;
        self.last_stats = result.stats;
        Some(result.action)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Agent backed by alpha-beta search.
pub struct AlphaBetaAgent<E: RulesEngine> {
    rules: E,
    config: SearchConfig,
    last_stats: SearchStats,
}

impl<E: RulesEngine> AlphaBetaAgent<E> {
    pub fn new(rules: E, config: SearchConfig) -> Self {
        Self {
            rules,
            config,
            last_stats: SearchStats::default(),
        }
    }

    /// Statistics of the most recent decision.
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }
}

impl<E: RulesEngine> Agent for AlphaBetaAgent<E> {
    fn select_action(&mut self, board: &Board, player: Player, history: &History) -> Option<Action> {
        let result = AlphaBeta::new(&self.rules, history, self.config.effective_ply_limit())
            .search(board, player)?;
        self.last_stats = result.stats;
        Some(result.action)
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }
}
