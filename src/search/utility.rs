//! Node scoring shared by minimax and alpha-beta.
//!
//! Decided games score `WIN_SCORE` or `LOSS_SCORE`. Undecided boards at the
//! search horizon score 0 when `player` trails on straights, otherwise the
//! player's straight count plus one.

use crate::core::{Board, Player};
use crate::rules::{History, RulesEngine};

/// Score of a board `player` has won.
pub const WIN_SCORE: i32 = 50;

/// Score of a board `player` has lost, and of a trailing position.
pub const LOSS_SCORE: i32 = 0;

/// Score `board` from `player`'s point of view.
///
/// `player` is also passed to the rules as the mover for repetition checks.
pub fn utility<E: RulesEngine + ?Sized>(
    rules: &E,
    board: &Board,
    player: Player,
    history: &History,
) -> i32 {
    let outcome = rules.evaluate(board, player, history);
    match outcome.winner {
        Some(winner) if outcome.done && winner == player => return WIN_SCORE,
        Some(_) if outcome.done => return LOSS_SCORE,
        _ => {}
    }

    let counts = rules.straights(board);
    if counts[player] < counts[player.opponent()] {
        return LOSS_SCORE;
    }
    counts[player] as i32 + 1
}
