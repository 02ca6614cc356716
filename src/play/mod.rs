//! Match driver: full games and exhibition series between agents.
//!
//! The driver owns the board and the history. It asks the agent to move for
//! the current player, applies the action, checks the rules, and either stops
//! or records the board and hands over the turn.

pub mod config;
pub mod exhibition;
pub mod game;

pub use config::MatchConfig;
pub use exhibition::{Exhibition, ExhibitionResult};
pub use game::{play_game, GameRecord};
