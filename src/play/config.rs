//! Match configuration.

use serde::{Deserialize, Serialize};

/// Configuration for an exhibition series.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Games to play; the first agent opens the even-numbered ones.
    pub games: u32,

    /// Moves after which a game stops without a winner (`None` = no cap).
    pub max_moves: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 5,
            max_moves: None,
        }
    }
}

impl MatchConfig {
    /// Set number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the per-game move cap; `None` removes it.
    pub fn with_max_moves(mut self, max_moves: impl Into<Option<usize>>) -> Self {
        self.max_moves = max_moves.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.games, 5);
        assert_eq!(config.max_moves, None);
    }

    #[test]
    fn test_builder_and_serialization() {
        let config = MatchConfig::default().with_games(2).with_max_moves(40);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
        assert_eq!(deserialized.max_moves, Some(40));
    }

    #[test]
    fn test_max_moves_accepts_option() {
        let capped = MatchConfig::default().with_max_moves(Some(12));
        assert_eq!(capped.max_moves, Some(12));
        assert_eq!(capped.with_max_moves(None).max_moves, None);
    }
}
