//! Game configuration.
//!
//! Push has a single structural parameter, the board dimension. It is fixed
//! for the lifetime of a game.

use serde::{Deserialize, Serialize};

use super::board::Board;

/// Default board dimension.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length `n` of the square board.
    pub board_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl GameConfig {
    /// Create a config for an `n`x`n` board.
    #[must_use]
    pub fn new(board_size: usize) -> Self {
        Self { board_size }
    }

    /// Set the board dimension.
    #[must_use]
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// An empty board of the configured size.
    #[must_use]
    pub fn initial_board(&self) -> Board {
        Board::new(self.board_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 4);
        assert_eq!(config.initial_board(), Board::new(4));
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default().with_board_size(6);
        assert_eq!(config, GameConfig::new(6));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
