//! Minimax with alpha-beta pruning.
//!
//! Searches the same tree as [`Minimax`](super::minimax::Minimax) with the same
//! utility and tie-break, so it picks the same action with the same value.
//!
//! Bounds are plain parameters: `alpha` is the best value the maximizer can
//! already guarantee on the current path, `beta` the best the minimizer can.
//! They start at (-inf, +inf) for every decision, and root siblings share the
//! improving `alpha`. Nothing outlives a single call to `search`.

use std::time::Instant;

use tracing::{debug, instrument, warn};

use crate::core::{Action, Board, Player};
use crate::rules::{History, RulesEngine};

use super::stats::SearchStats;
use super::utility::utility;
use super::SearchResult;

/// One alpha-beta decision. Create a fresh context per move.
pub struct AlphaBeta<'a, E: RulesEngine> {
    rules: &'a E,
    history: &'a History,
    ply_limit: u32,
    stats: SearchStats,
}

impl<'a, E: RulesEngine> AlphaBeta<'a, E> {
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
    /// A root action whose value cannot beat the current best is cut short;
    /// its reported bound never exceeds `alpha`, so it is never chosen.
    #[instrument(skip_all, fields(player = %player, ply_limit = self.ply_limit))]
    pub fn search(mut self, board: &Board, player: Player) -> Option<SearchResult> {
        let start = Instant::now();
        let mut best: Option<(Action, i32)> = None;
        let mut alpha = i32::MIN;
        let beta = i32::MAX;

        for action in self.rules.legal_actions(board) {
            let Some(child) = self.child(board, player, action) else {
                continue;
            };
            let value = self.min_value(&child, player.opponent(), 1, alpha, beta);
            if best.map_or(true, |(_, v)| value > v) {
                best = Some((action, value));
            }
            alpha = alpha.max(value);
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        let (action, value) = best?;
        debug!(
            %action,
            value,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            nps = self.stats.nodes_per_second(),
            "alpha-beta decision"
        );

        Some(SearchResult {
            action,
            value,
            stats: self.stats,
        })
    }

    /// Exact value of every root action, each searched with a full window.
    pub fn action_values(mut self, board: &Board, player: Player) -> Vec<(Action, i32)> {
        let mut values = Vec::new();
        for action in self.rules.legal_actions(board) {
            if let Some(child) = self.child(board, player, action) {
                let value = self.min_value(&child, player.opponent(), 1, i32::MIN, i32::MAX);
                values.push((action, value));
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

    fn max_value(&mut self, board: &Board, player: Player, ply: u32, mut alpha: i32, beta: i32) -> i32 {
        self.stats.nodes += 1;
        if ply >= self.ply_limit {
            return self.leaf(board, player);
        }

        let mut v = i32::MIN;
        for action in self.rules.legal_actions(board) {
            let Some(child) = self.child(board, player, action) else {
                continue;
            };
            v = v.max(self.min_value(&child, player.opponent(), ply + 1, alpha, beta));
            if v >= beta {
                self.stats.cutoffs += 1;
                return v;
            }
            alpha = alpha.max(v);
        }
        v
    }

    fn min_value(&mut self, board: &Board, player: Player, ply: u32, alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;
        if ply >= self.ply_limit {
            return self.leaf(board, player);
        }

        let mut v = i32::MAX;
        for action in self.rules.legal_actions(board) {
            let Some(child) = self.child(board, player, action) else {
                continue;
            };
            v = v.min(self.max_value(&child, player.opponent(), ply + 1, alpha, beta));
            if v <= alpha {
                self.stats.cutoffs += 1;
                return v;
            }
            beta = beta.min(v);
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::PushRules;
    use crate::search::minimax::Minimax;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn assert_matches_minimax(b: &Board, player: Player, ply_limit: u32, history: &History) {
        let rules = PushRules::with_board_size(b.size());
        let plain = Minimax::new(&rules, history, ply_limit).search(b, player).unwrap();
        let pruned = AlphaBeta::new(&rules, history, ply_limit).search(b, player).unwrap();

        assert_eq!(plain.action, pruned.action, "board:\n{b}\nply {ply_limit}");
        assert_eq!(plain.value, pruned.value, "board:\n{b}\nply {ply_limit}");
        assert!(pruned.stats.nodes <= plain.stats.nodes);
    }

    #[test]
    fn test_matches_minimax_on_small_boards() {
        let history = History::new();
        let boards = [
            Board::new(3),
            board("XX.\n...\n..."),
            board("XO.\nOX.\n..O"),
            board("OOX\nX.X\n.O."),
        ];
        for b in &boards {
            for ply in 1..=3 {
                assert_matches_minimax(b, Player::X, ply, &history);
                assert_matches_minimax(b, Player::O, ply, &history);
            }
        }
    }

    #[test]
    fn test_matches_minimax_with_history() {
        let b = board("X..\n.O.\n...");
        let history: History = vec![
            board("X..\n...\n..."),
            b.clone(),
            board("XX.\n.O.\n..."),
        ]
        .into_iter()
        .collect();
        for ply in 1..=3 {
            assert_matches_minimax(&b, Player::X, ply, &history);
        }
    }

    #[test]
    fn test_action_values_equal_minimax() {
        let rules = PushRules::with_board_size(3);
        let history = History::new();
        let b = board("XO.\n.X.\nO..");

        let plain = Minimax::new(&rules, &history, 2).action_values(&b, Player::O);
        let pruned = AlphaBeta::new(&rules, &history, 2).action_values(&b, Player::O);
        assert_eq!(plain, pruned);
    }

    #[test]
    fn test_prunes_something() {
        let rules = PushRules::with_board_size(3);
        let history = History::new();
        let result = AlphaBeta::new(&rules, &history, 3)
            .search(&Board::new(3), Player::X)
            .unwrap();
        assert!(result.stats.cutoffs > 0);
    }

    #[test]
    fn test_calls_are_independent() {
        let rules = PushRules::with_board_size(3);
        let history = History::new();
        let b = board("X..\n.O.\n...");

        let first = AlphaBeta::new(&rules, &history, 2).search(&b, Player::O).unwrap();
        let _ = AlphaBeta::new(&rules, &history, 3).search(&Board::new(3), Player::X);
        let again = AlphaBeta::new(&rules, &history, 2).search(&b, Player::O).unwrap();

        assert_eq!(first.action, again.action);
        assert_eq!(first.value, again.value);
        assert_eq!(first.stats.nodes, again.stats.nodes);
    }
}
