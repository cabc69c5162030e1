//! Core trait definitions for the GVGAI agent client.
//!
//! These four traits are the seams of the client:
//!
//! - `Agent`: the pluggable decision strategy
//! - `Session`: one match against the engine, started once
//! - `SessionFactory`: builds a session bound to a named agent
//! - `Transport`: the line channel a session talks over
//!
//! The bootstrap only knows `SessionFactory` and `Session`. Everything the
//! session does with `Agent` and `Transport` is invisible to it.

use std::time::Duration;

use gvgai_contracts::{
    agent::AgentId,
    error::ClientResult,
    game::{Action, Observation},
};

/// A decision-making strategy that plays one game at a time.
///
/// The session calls `init` once per game, `act` once per tick, and
/// `result` when the game ends. Each call carries the time budget the
/// engine allows for the answer; agents are expected to respect it, but
/// the client does not interrupt them.
pub trait Agent: Send {
    /// Prepare for a new game, given its first observation.
    fn init(&mut self, _state: &Observation, _budget: Duration) -> ClientResult<()> {
        Ok(())
    }

    /// Choose the action to take on this tick.
    fn act(&mut self, state: &Observation, budget: Duration) -> ClientResult<Action>;

    /// Observe the final state of a game.
    ///
    /// Returns the level the agent wants to play next, or `None` to let the
    /// engine decide.
    fn result(&mut self, _state: &Observation, _budget: Duration) -> ClientResult<Option<u32>> {
        Ok(None)
    }
}

/// A communication session with the engine, bound to one agent.
pub trait Session {
    /// Run the whole match: connect, play every game, disconnect.
    ///
    /// Blocks until the engine ends the match or an error occurs.
    fn start(&mut self) -> ClientResult<()>;
}

/// Builds sessions from a fully qualified agent identifier.
///
/// Resolving the identifier to an agent implementation is the factory's job;
/// an unknown identifier is the factory's error to raise.
pub trait SessionFactory {
    /// Construct a session for `agent_id` without starting it.
    fn construct(&self, agent_id: &AgentId) -> ClientResult<Box<dyn Session>>;
}

/// A bidirectional, line-oriented channel to the engine.
pub trait Transport: Send {
    /// Block until the next line arrives.
    ///
    /// Returns `Ok(None)` when the engine has closed the channel. The line
    /// terminator is not included.
    fn recv_line(&mut self) -> ClientResult<Option<String>>;

    /// Send one line. The transport appends the terminator and flushes.
    fn send_line(&mut self, line: &str) -> ClientResult<()>;
}
