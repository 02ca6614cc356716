//! # rust-push
//!
//! Board engine and game-tree search agents for Push, a two-player game on
//! an n×n grid.
//!
//! ## Rules in brief
//!
//! A move pushes a piece into a row or column from one of the four edges.
//! Existing pieces shift to fill the nearest gap; if the line is full, the
//! piece at the far end falls off. A **straight** is a row, column, or main
//! diagonal held entirely by one player. The first player to hold strictly
//! more straights than the other wins. A move that recreates an earlier board
//! loses.
//!
//! ## Design Principles
//!
//! 1. **Value boards**: every transition returns a new `Board`. Boards in
//!    the history are never aliased by the board in play.
//!
//! 2. **No hidden search state**: alpha-beta bounds are parameters of a single
//!    decision, so agents can be used for independent games concurrently.
//!
//! 3. **Deterministic**: random play is driven by seeded ChaCha8 streams.
//!
//! ## Modules
//!
//! - `core`: Players, cells, board, actions, RNG, configuration
//! - `rules`: RulesEngine trait, Push rules, board history
//! - `search`: Random, minimax, and alpha-beta agents
//! - `play`: Match driver and exhibition tallies

pub mod core;
pub mod rules;
pub mod search;
pub mod play;

// Re-export commonly used types
pub use crate::core::{
    Action, Board, Cell, Edge, GameConfig, GameRng, GameRngState, InvalidMoveError, Move,
    MoveRecord, ParseBoardError, Player, PlayerMap, StraightCounts,
};

pub use crate::rules::{History, Outcome, PushRules, RulesEngine};

pub use crate::search::{
    choose_move, Agent, AgentKind, AlphaBeta, AlphaBetaAgent, Minimax, MinimaxAgent,
    RandomAgent, SearchConfig, SearchResult, SearchStats,
};

pub use crate::play::{play_game, Exhibition, ExhibitionResult, GameRecord, MatchConfig};

/// Empty `n`x`n` board.
#[must_use]
pub fn create_board(n: usize) -> Board {
    Board::new(n)
}

/// Apply `mv` to `board`, returning the new board.
pub fn apply_move(board: &Board, mv: &Move) -> Result<Board, InvalidMoveError> {
    board.apply_move(mv)
}

/// Straight counts for `board`.
#[must_use]
pub fn count_straights(board: &Board) -> StraightCounts {
    board.count_straights()
}

/// Cell-by-cell equality of two boards from the same game.
#[must_use]
pub fn boards_equal(a: &Board, b: &Board) -> bool {
    a == b
}

/// Game-end check with the standard rules for `board`'s size.
#[must_use]
pub fn evaluate(board: &Board, mover: Player, history: &History) -> Outcome {
    PushRules::with_board_size(board.size()).evaluate(board, mover, history)
}
