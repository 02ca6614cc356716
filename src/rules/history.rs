//! Board history for cycle detection.
//!
//! The match driver owns the history and appends every board that did not end
//! the game. Rules and search only read it. Both collections are persistent
//! (`im`), so handing a snapshot to another game or thread is an O(1) clone.

use im::{HashSet as ImHashSet, Vector};
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

use crate::core::Board;

type BoardSet = ImHashSet<Board, BuildHasherDefault<FxHasher>>;

/// Ordered, append-only sequence of boards seen in the current game.
#[derive(Clone, Debug, Default)]
pub struct History {
    boards: Vector<Board>,
    seen: BoardSet,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a board.
    pub fn push(&mut self, board: Board) {
        self.seen.insert(board.clone());
        self.boards.push_back(board);
    }

    /// True if a structurally equal board has been recorded.
    #[must_use]
    pub fn contains(&self, board: &Board) -> bool {
        self.seen.contains(board)
    }

    /// Number of boards recorded, repeats included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// The most recently recorded board.
    #[must_use]
    pub fn last(&self) -> Option<&Board> {
        self.boards.last()
    }

    /// Boards in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }
}

impl FromIterator<Board> for History {
    fn from_iter<I: IntoIterator<Item = Board>>(iter: I) -> Self {
        let mut history = History::new();
        for board in iter {
            history.push(board);
        }
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Edge, Move, Player};

    #[test]
    fn test_empty_history() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(!history.contains(&Board::new(4)));
        assert!(history.last().is_none());
    }

    #[test]
    fn test_contains_uses_structural_equality() {
        let board = Board::new(3)
            .apply_move(&Move::new(Player::X, Edge::Left, 2))
            .unwrap();
        let history: History = std::iter::once(board).collect();

        let rebuilt: Board = "...\nX..\n...".parse().unwrap();
        assert!(history.contains(&rebuilt));
        assert!(!history.contains(&Board::new(3)));
    }

    #[test]
    fn test_order_is_preserved() {
        let a = Board::new(2);
        let b: Board = "X.\n..".parse().unwrap();
        let history: History = vec![a.clone(), b.clone(), a.clone()].into_iter().collect();

        assert_eq!(history.len(), 3);
        assert_eq!(history.last(), Some(&a));
        let order: Vec<_> = history.iter().cloned().collect();
        assert_eq!(order, vec![a.clone(), b, a]);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut history = History::new();
        history.push(Board::new(2));
        let snapshot = history.clone();

        history.push("O.\n..".parse().unwrap());
        assert_eq!(snapshot.len(), 1);
        assert_eq!(history.len(), 2);
    }
}
