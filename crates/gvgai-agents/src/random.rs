//! The reference random-policy agent.
//!
//! Picks uniformly among the actions the engine reports as available on each
//! tick. It is the agent the client runs when no agent is named.

use std::time::Duration;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::debug;

use gvgai_contracts::{
    error::ClientResult,
    game::{Action, Observation},
};
use gvgai_core::traits::Agent;

/// Chooses a uniformly random available action every tick.
#[derive(Debug)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    /// Create a random agent. With a seed, its choices are reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn init(&mut self, state: &Observation, _budget: Duration) -> ClientResult<()> {
        debug!(
            available = state.available_actions.len(),
            "random agent ready"
        );
        Ok(())
    }

    /// Falls back to `Action::Nil` when the engine offers no actions.
    fn act(&mut self, state: &Observation, _budget: Duration) -> ClientResult<Action> {
        Ok(state
            .available_actions
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Action::Nil))
    }
}
