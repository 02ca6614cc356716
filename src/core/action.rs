//! Action representation: entry edge + line index, optionally bound to a player.
//!
//! An `Action` is what search enumerates: "push into row/column `index` from
//! `edge`". Binding it to a player yields a `Move`, which is what the board
//! engine applies.

use serde::{Deserialize, Serialize};

use super::error::InvalidMoveError;
use super::player::Player;

/// The side of the board a piece is pushed in from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// All edges in enumeration order.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Single-letter code (`T`, `B`, `L`, `R`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Edge::Top => 'T',
            Edge::Bottom => 'B',
            Edge::Left => 'L',
            Edge::Right => 'R',
        }
    }

    /// True for edges that push along a column.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }

    /// True for edges that enter at the start of the line (left end of a row,
    /// top end of a column).
    #[must_use]
    pub const fn enters_at_start(self) -> bool {
        matches!(self, Edge::Top | Edge::Left)
    }
}

impl TryFrom<char> for Edge {
    type Error = InvalidMoveError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'T' => Ok(Edge::Top),
            'B' => Ok(Edge::Bottom),
            'L' => Ok(Edge::Left),
            'R' => Ok(Edge::Right),
            other => Err(InvalidMoveError::UnknownEdge(other)),
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An edge/index choice without a player.
///
/// `index` is 1-based, in `1..=n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub edge: Edge,
    pub index: usize,
}

impl Action {
    #[must_use]
    pub const fn new(edge: Edge, index: usize) -> Self {
        Self { edge, index }
    }

    /// Bind this action to the player making it.
    #[must_use]
    pub const fn by(self, player: Player) -> Move {
        Move {
            player,
            edge: self.edge,
            index: self.index,
        }
    }

    /// Enumerate every action on an `size`x`size` board.
    ///
    /// Edge-major: all Top indices, then Bottom, Left, Right. Search relies on
    /// this order for tie-breaking.
    ///
    /// ```
    /// use rust_push::core::{Action, Edge};
    ///
    /// let actions = Action::all(3);
    /// assert_eq!(actions.len(), 12);
    /// assert_eq!(actions[0], Action::new(Edge::Top, 1));
    /// assert_eq!(actions[3], Action::new(Edge::Bottom, 1));
    /// ```
    #[must_use]
    pub fn all(size: usize) -> Vec<Action> {
        Edge::ALL
            .iter()
            .flat_map(|&edge| (1..=size).map(move |index| Action::new(edge, index)))
            .collect()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.edge, self.index)
    }
}

/// A complete move: who pushes, from which edge, into which line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub edge: Edge,
    pub index: usize,
}

impl Move {
    #[must_use]
    pub const fn new(player: Player, edge: Edge, index: usize) -> Self {
        Self { player, edge, index }
    }

    /// Build a move from raw codes, e.g. `('X', 'L', 3)`.
    ///
    /// Only the player and edge are checked here; the index is checked
    /// against a concrete board by `Board::apply_move`.
    pub fn parse(player: char, edge: char, index: usize) -> Result<Self, InvalidMoveError> {
        Ok(Self {
            player: Player::try_from(player)?,
            edge: Edge::try_from(edge)?,
            index,
        })
    }

    /// Drop the player.
    #[must_use]
    pub const fn action(&self) -> Action {
        Action::new(self.edge, self.index)
    }
}

/// A recorded move with its position in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// Half-move number, starting at 1.
    pub ply: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: Player, action: Action, ply: u32) -> Self {
        Self { player, action, ply }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_actions_count_and_uniqueness() {
        for n in 1..=6 {
            let actions = Action::all(n);
            assert_eq!(actions.len(), 4 * n);

            let unique: HashSet<_> = actions.iter().collect();
            assert_eq!(unique.len(), actions.len());
        }
    }

    #[test]
    fn test_all_actions_edge_major_order() {
        let actions = Action::all(2);
        let codes: Vec<String> = actions.iter().map(ToString::to_string).collect();
        assert_eq!(codes, ["T1", "T2", "B1", "B2", "L1", "L2", "R1", "R2"]);
    }

    #[test]
    fn test_edge_from_char() {
        for edge in Edge::ALL {
            assert_eq!(Edge::try_from(edge.code()), Ok(edge));
        }
        assert_eq!(Edge::try_from('x'), Err(InvalidMoveError::UnknownEdge('x')));
    }

    #[test]
    fn test_move_parse() {
        let mv = Move::parse('O', 'B', 2).unwrap();
        assert_eq!(mv, Move::new(Player::O, Edge::Bottom, 2));
        assert_eq!(mv.action(), Action::new(Edge::Bottom, 2));

        assert_eq!(
            Move::parse('Y', 'B', 2),
            Err(InvalidMoveError::UnknownPlayer('Y'))
        );
        assert_eq!(
            Move::parse('X', 'D', 2),
            Err(InvalidMoveError::UnknownEdge('D'))
        );
    }

    #[test]
    fn test_action_by_player() {
        let mv = Action::new(Edge::Left, 1).by(Player::X);
        assert_eq!(mv, Move::new(Player::X, Edge::Left, 1));
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(Player::O, Action::new(Edge::Right, 4), 7);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
