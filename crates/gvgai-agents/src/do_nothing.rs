//! An agent that never moves. Useful as a baseline and for smoke tests
//! against a live engine.

use std::time::Duration;

use gvgai_contracts::{
    error::ClientResult,
    game::{Action, Observation},
};
use gvgai_core::traits::Agent;

#[derive(Debug, Default)]
pub struct DoNothingAgent;

impl Agent for DoNothingAgent {
    fn act(&mut self, _state: &Observation, _budget: Duration) -> ClientResult<Action> {
        Ok(Action::Nil)
    }
}
