//! Playing a single game between two agents.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Board, InvalidMoveError, MoveRecord, Player};
use crate::rules::{History, Outcome, RulesEngine};
use crate::search::Agent;

use super::config::MatchConfig;

/// Everything that happened in one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Name of the agent playing X (moves first).
    pub x_agent: String,
    /// Name of the agent playing O.
    pub o_agent: String,
    /// Moves in order.
    pub moves: Vec<MoveRecord>,
    /// Board after the last move.
    pub final_board: Board,
    /// How the game ended.
    pub outcome: Outcome,
}

impl GameRecord {
    /// Name of the winning agent, if any.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        match self.outcome.winner? {
            Player::X => Some(&self.x_agent),
            Player::O => Some(&self.o_agent),
        }
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}

/// Play one game: `x` moves first, `o` second.
///
/// After each move the board is evaluated with the mover. A board that does
/// not end the game is appended to the history. Fails only if an agent returns
/// an action the rules reject.
pub fn play_game<E: RulesEngine + ?Sized>(
    rules: &E,
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    config: &MatchConfig,
) -> Result<GameRecord, InvalidMoveError> {
    let mut board = rules.initial_board();
    let mut history = History::new();
    let mut moves = Vec::new();
    let mut player = Player::X;

    let outcome = loop {
        if config.max_moves.is_some_and(|cap| moves.len() >= cap) {
            break Outcome::unresolved();
        }

        let agent: &mut dyn Agent = match player {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let Some(action) = agent.select_action(&board, player, &history) else {
            break Outcome::unresolved();
        };

        board = rules.apply_action(&board, player, action)?;
        moves.push(MoveRecord::new(player, action, moves.len() as u32 + 1));
        debug!(%player, %action, "move");

        let outcome = rules.evaluate(&board, player, &history);
        if outcome.done {
            break outcome;
        }
        history.push(board.clone());
        player = player.opponent();
    };

    info!(
        x = x.name(),
        o = o.name(),
        moves = moves.len(),
        winner = ?outcome.winner,
        "game over"
    );

    Ok(GameRecord {
        x_agent: x.name().to_string(),
        o_agent: o.name().to_string(),
        moves,
        final_board: board,
        outcome,
    })
}
