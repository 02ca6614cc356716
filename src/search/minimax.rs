//! Depth-limited minimax without pruning.
//!
//! Every node carries the player to move there. Root children are min nodes
//! for the opponent at ply 1; levels alternate until the ply limit, where the
//! board is scored with `utility` for the player to move at that node.
//! Complexity is O((4n)^D).

use std::time::Instant;

use tracing::{debug, instrument, warn};

use crate::core::{Action, Board, Player};
use crate::rules::{History, RulesEngine};

use super::stats::SearchStats;
use super::utility::utility;
use super::SearchResult;

/// One minimax decision. Create a fresh context per move.
pub struct Minimax<'a, E: RulesEngine> {
    rules: &'a E,
    history: &'a History,
    ply_limit: u32,
    stats: SearchStats,
}

impl<'a, E: RulesEngine> Minimax<'a, E> {
    pub fn new(rules: &'a E, history: &'a History, ply_limit: u32) -> Self {
        Self {
            rules,
            history,
            ply_limit: ply_limit.max(1),
            stats: SearchStats::new(),
        }
    }

    /// Pick the action with the strictly greatest value for `player`.
    ///
    /// Ties keep the earlier action in `legal_actions` order. Returns `None`
    /// only when the board offers no actions.
    #[instrument(skip_all, fields(player = %player, ply_limit = self.ply_limit))]
    pub fn search(mut self, board: &Board, player: Player) -> Option<SearchResult> {
        let start = Instant::now();
        let mut best: Option<(Action, i32)> = None;

        for action in self.rules.legal_actions(board) {
            let Some(child) = self.child(board, player, action) else {
                continue;
            };
            let value = self.min_value(&child, player.opponent(), 1);
            if best.map_or(true, |(_, v)| value > v) {
                best = Some((action, value));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        let (action, value) = best?;
        debug!(
            %action,
            value,
            nodes = self.stats.nodes,
            nps = self.stats.nodes_per_second(),
            "minimax decision"
        );

        Some(SearchResult {
            action,
            value,
            stats: self.stats,
        })
    }

    /// Minimax value of every root action, in `legal_actions` order.
    pub fn action_values(mut self, board: &Board, player: Player) -> Vec<(Action, i32)> {
        let mut values = Vec::new();
        for action in self.rules.legal_actions(board) {
            if let Some(child) = self.child(board, player, action) {
                values.push((action, self.min_value(&child, player.opponent(), 1)));
            }
        }
        values
    }

    fn child(&self, board: &Board, player: Player, action: Action) -> Option<Board> {
        match self.rules.apply_action(board, player, action) {
            Ok(child) => Some(child),
            Err(err) => {
                warn!(%action, %err, "skipping inapplicable action");
                None
            }
        }
    }

    fn leaf(&mut self, board: &Board, player: Player) -> i32 {
        self.stats.leaves += 1;
        utility(self.rules, board, player, self.history)
    }

    fn max_value(&mut self, board: &Board, player: Player, ply: u32) -> i32 {
        self.stats.nodes += 1;
        if ply >= self.ply_limit {
            return self.leaf(board, player);
        }

        let mut v = i32::MIN;
        for action in self.rules.legal_actions(board) {
            if let Some(child) = self.child(board, player, action) {
                v = v.max(self.min_value(&child, player.opponent(), ply + 1));
            }
        }
        v
    }

    fn min_value(&mut self, board: &Board, player: Player, ply: u32) -> i32 {
        self.stats.nodes += 1;
        if ply >= self.ply_limit {
            return self.leaf(board, player);
        }

        let mut v = i32::MAX;
        for action in self.rules.legal_actions(board) {
            if let Some(child) = self.child(board, player, action) {
                v = v.min(self.max_value(&child, player.opponent(), ply + 1));
            }
        }
        v
    }
}
