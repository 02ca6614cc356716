//! Core engine types: players, cells, board, actions, RNG, configuration.
//!
//! Everything here is a value type. Boards are never mutated in place by
//! callers; every transition produces a new board.

pub mod player;
pub mod error;
pub mod action;
pub mod board;
pub mod rng;
pub mod config;

pub use player::{Cell, Player, PlayerMap};
pub use error::{InvalidMoveError, ParseBoardError};
pub use action::{Action, Edge, Move, MoveRecord};
pub use board::{Board, StraightCounts};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, DEFAULT_BOARD_SIZE};
