//! # gvgai-agents
//!
//! Reference agents for the GVGAI agent client, and the registry the client
//! binary resolves agent names against.
//!
//! Registered identifiers:
//!
//! 1. **`Agents.Agent`**: the default agent; random policy.
//! 2. **`sampleRandom.Agent`**: random policy under its sample name.
//! 3. **`doNothing.Agent`**: always answers `ACTION_NIL`.

pub mod do_nothing;
pub mod random;

use gvgai_contracts::agent::{AgentId, AgentSettings, DEFAULT_AGENT_BASE};
use gvgai_core::{traits::Agent, AgentRegistry};

pub use do_nothing::DoNothingAgent;
pub use random::RandomAgent;

/// Base name of the random-policy sample agent.
pub const SAMPLE_RANDOM: &str = "sampleRandom";

/// Base name of the do-nothing agent.
pub const DO_NOTHING: &str = "doNothing";

/// Build a registry holding every reference agent.
pub fn builtin_registry() -> AgentRegistry {
    let mut registry = AgentRegistry::new();
    register_builtins(&mut registry);
    registry
}

/// Add every reference agent to `registry`.
pub fn register_builtins(registry: &mut AgentRegistry) {
    for base in [DEFAULT_AGENT_BASE, SAMPLE_RANDOM] {
        registry.register(AgentId::builtin(base), random_factory);
    }
    registry.register(AgentId::builtin(DO_NOTHING), |_: &AgentSettings| {
        Box::new(DoNothingAgent) as Box<dyn Agent>
    });
}

fn random_factory(settings: &AgentSettings) -> Box<dyn Agent> {
    Box::new(RandomAgent::new(settings.seed))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
