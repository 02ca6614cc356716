//! Exhibition series: two agents, alternating who moves first.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Board, InvalidMoveError, Player};
use crate::rules::RulesEngine;
use crate::search::Agent;

use super::config::MatchConfig;
use super::game::{play_game, GameRecord};

/// Tally of an exhibition between agents `a` and `b`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitionResult {
    /// Names of agents `a` and `b`.
    pub names: [String; 2],
    /// Wins of agents `a` and `b`.
    pub wins: [u32; 2],
    /// Games that ended without a winner.
    pub unresolved: u32,
    /// Final board of the last game played.
    pub last_board: Option<Board>,
}

impl ExhibitionResult {
    /// Total games played.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.wins[0] + self.wins[1] + self.unresolved
    }
}

/// Runs a series of games between two agents.
pub struct Exhibition<'a, E: RulesEngine> {
    rules: &'a E,
    config: MatchConfig,
}

impl<'a, E: RulesEngine> Exhibition<'a, E> {
    pub fn new(rules: &'a E, config: MatchConfig) -> Self {
        Self { rules, config }
    }

    /// Play the series. Agent `a` plays X in even-numbered games, `b` in odd.
    pub fn run(&self, a: &mut dyn Agent, b: &mut dyn Agent) -> Result<ExhibitionResult, InvalidMoveError> {
        let mut result = ExhibitionResult {
            names: [a.name().to_string(), b.name().to_string()],
            wins: [0, 0],
            unresolved: 0,
            last_board: None,
        };

        for game in 0..self.config.games {
            let a_first = game % 2 == 0;
            let record: GameRecord = if a_first {
                play_game(self.rules, a, b, &self.config)?
            } else {
                play_game(self.rules, b, a, &self.config)?
            };

            let a_seat = if a_first { Player::X } else { Player::O };
            match record.outcome.winner {
                Some(w) if w == a_seat => result.wins[0] += 1,
                Some(_) => result.wins[1] += 1,
                None => result.unresolved += 1,
            }
            result.last_board = Some(record.final_board);
        }

        info!(
            a = %result.names[0],
            b = %result.names[1],
            a_wins = result.wins[0],
            b_wins = result.wins[1],
            unresolved = result.unresolved,
            "exhibition finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::PushRules;
    use crate::core::{Action, Edge};
    use crate::rules::History;
    use crate::search::{MinimaxAgent, RandomAgent, SearchConfig};

    /// Builds row 0 as X and row 2 as O, so X completes a straight on its third move.
    struct TopRowForX;

    impl Agent for TopRowForX {
        fn select_action(&mut self, _: &Board, player: Player, _: &History) -> Option<Action> {
            let index = match player {
                Player::X => 1,
                Player::O => 3,
            };
            Some(Action::new(Edge::Left, index))
        }

        fn name(&self) -> &str {
            "TopRow"
        }
    }

    #[test]
    fn test_wins_follow_the_seat() {
        let rules = PushRules::with_board_size(3);
        let mut a = TopRowForX;
        let mut b = TopRowForX;

        let two = Exhibition::new(&rules, MatchConfig::default().with_games(2))
            .run(&mut a, &mut b)
            .unwrap();
        assert_eq!(two.wins, [1, 1]);
        assert_eq!(two.unresolved, 0);

        let three = Exhibition::new(&rules, MatchConfig::default().with_games(3))
            .run(&mut a, &mut b)
            .unwrap();
        assert_eq!(three.wins, [2, 1]);
        assert_eq!(three.unresolved, 0);
        assert_eq!(
            three.last_board.map(|board| board.to_string()),
            Some("XXX\n...\nOO.".to_string())
        );
    }

    #[test]
    fn test_all_games_are_tallied() {
        let rules = PushRules::with_board_size(3);
        let exhibition = Exhibition::new(&rules, MatchConfig::default().with_games(4));
        let mut a = RandomAgent::new(1);
        let mut b = RandomAgent::new(2);

        let result = exhibition.run(&mut a, &mut b).unwrap();
        assert_eq!(result.games(), 4);
        assert_eq!(result.unresolved, 0);
        assert_eq!(result.names, ["Random".to_string(), "Random".to_string()]);
        assert!(result.last_board.is_some());
    }

    #[test]
    fn test_capped_games_count_as_unresolved() {
        let rules = PushRules::with_board_size(4);
        let config = MatchConfig::default().with_games(3).with_max_moves(2);
        let mut a = MinimaxAgent::new(rules.clone(), SearchConfig::default().with_ply_limit(1));
        let mut b = RandomAgent::new(9);

        let result = Exhibition::new(&rules, config).run(&mut a, &mut b).unwrap();
        assert_eq!(result.unresolved, 3);
        assert_eq!(result.wins, [0, 0]);
    }

    #[test]
    fn test_zero_games() {
        let rules = PushRules::default();
        let mut a = RandomAgent::new(1);
        let mut b = RandomAgent::new(2);
        let result = Exhibition::new(&rules, MatchConfig::default().with_games(0))
            .run(&mut a, &mut b)
            .unwrap();
        assert_eq!(result.games(), 0);
        assert!(result.last_board.is_none());
    }
}
