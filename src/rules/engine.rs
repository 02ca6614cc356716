//! Rules engine trait and the Push rules.
//!
//! A game ends when one player holds strictly more straights than the other,
//! or when a move recreates a board already in the history. Straights are
//! checked first: a repeated board that also decides the material count is
//! won on material.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, GameConfig, InvalidMoveError, Player, StraightCounts};

use super::history::History;

/// Result of checking a board for game end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// True if the game is over.
    pub done: bool,
    /// The winner, if the game is over and someone won.
    pub winner: Option<Player>,
}

impl Outcome {
    /// Game continues.
    pub const ONGOING: Outcome = Outcome {
        done: false,
        winner: None,
    };

    /// Game over, `player` won.
    #[must_use]
    pub const fn won(player: Player) -> Self {
        Self {
            done: true,
            winner: Some(player),
        }
    }

    /// Game stopped without a winner (move cap reached).
    #[must_use]
    pub const fn unresolved() -> Self {
        Self {
            done: true,
            winner: None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.done && self.winner == Some(player)
    }
}

/// Rules engine trait.
///
/// Search agents and the match driver only talk to the game through this
/// trait. Transitions must be pure: `apply_action` returns a new board.
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Board at the start of a game.
    fn initial_board(&self) -> Board {
        self.config().initial_board()
    }

    /// Every action available on `board`, in a fixed order.
    ///
    /// Search breaks ties by this order.
    fn legal_actions(&self, board: &Board) -> Vec<Action> {
        Action::all(board.size())
    }

    /// Apply `action` for `player`, returning the new board.
    fn apply_action(
        &self,
        board: &Board,
        player: Player,
        action: Action,
    ) -> Result<Board, InvalidMoveError> {
        board.apply_move(&action.by(player))
    }

    /// Straight counts for `board`.
    fn straights(&self, board: &Board) -> StraightCounts {
        board.count_straights()
    }

    /// Decide whether the game is over after `mover` produced `board`.
    fn evaluate(&self, board: &Board, mover: Player, history: &History) -> Outcome;
}

/// The standard Push rules.
#[derive(Clone, Debug, Default)]
pub struct PushRules {
    config: GameConfig,
}

impl PushRules {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Rules for an `n`x`n` board.
    #[must_use]
    pub fn with_board_size(board_size: usize) -> Self {
        Self::new(GameConfig::new(board_size))
    }
}

impl RulesEngine for PushRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn evaluate(&self, board: &Board, mover: Player, history: &History) -> Outcome {
        if let Some(leader) = self.straights(board).leader() {
            return Outcome::won(leader);
        }
        // Closing a cycle hands the game to the other side.
        if history.contains(board) {
            return Outcome::won(mover.opponent());
        }
        Outcome::ONGOING
    }
}
