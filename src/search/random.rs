//! Uniform random agent.
//!
//! Samples the edge and the index independently; no action list is built.

use crate::core::{Action, Board, Edge, GameRng, GameRngState, Player};
use crate::rules::History;

use super::agent::Agent;

/// An agent that pushes from a uniformly random edge into a uniformly random line.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create an agent with its own seeded stream.
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create an agent drawing from an existing stream.
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Resume an agent from a saved stream position.
    pub fn from_state(state: &GameRngState) -> Self {
        Self::from_rng(GameRng::from_state(state))
    }

    /// Current stream position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Sample one action for an `size`x`size` board.
    pub fn sample(rng: &mut GameRng, size: usize) -> Option<Action> {
        if size == 0 {
            return None;
        }
        let edge = *rng.choose(&Edge::ALL)?;
        Some(Action::new(edge, rng.gen_index(1..=size)))
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board, _player: Player, _history: &History) -> Option<Action> {
        Self::sample(&mut self.rng, board.size())
    }

    fn name(&self) -> &str {
        "Random"
    }
}
