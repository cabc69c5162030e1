//! Named registry of agent implementations.
//!
//! Agents are selected by identifier at run time. Instead of loading types by
//! name, every implementation is registered up front with a factory closure,
//! and the session asks the registry to instantiate the one it was given.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};

use gvgai_contracts::{
    agent::{AgentId, AgentSettings},
    error::{ClientError, ClientResult},
};

use crate::traits::Agent;

/// Constructor for one agent implementation.
pub type AgentFactory = Box<dyn Fn(&AgentSettings) -> Box<dyn Agent> + Send + Sync>;

/// Maps fully qualified agent identifiers to their factories.
///
/// Identifiers are kept sorted so error messages and listings are stable.
#[derive(Default)]
pub struct AgentRegistry {
    factories: BTreeMap<AgentId, AgentFactory>,
}

impl AgentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `agent_id`.
    ///
    /// A later registration under the same identifier replaces the earlier one.
    pub fn register<F>(&mut self, agent_id: AgentId, factory: F) -> &mut Self
    where
        F: Fn(&AgentSettings) -> Box<dyn Agent> + Send + Sync + 'static,
    {
        if self.factories.contains_key(&agent_id) {
            warn!(agent_id = %agent_id, "replacing registered agent factory");
        }
        self.factories.insert(agent_id, Box::new(factory));
        self
    }

    /// Return true if an agent is registered under `agent_id`.
    pub fn contains(&self, agent_id: &AgentId) -> bool {
        self.factories.contains_key(agent_id)
    }

    /// All registered identifiers, in sorted order.
    pub fn identifiers(&self) -> Vec<&AgentId> {
        self.factories.keys().collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Build a fresh agent for `agent_id`.
    ///
    /// Returns `ClientError::UnknownAgent` listing the registered identifiers
    /// if nothing is registered under `agent_id`.
    pub fn instantiate(
        &self,
        agent_id: &AgentId,
        settings: &AgentSettings,
    ) -> ClientResult<Box<dyn Agent>> {
        let factory = self
            .factories
            .get(agent_id)
            .ok_or_else(|| ClientError::UnknownAgent {
                identifier: agent_id.to_string(),
                known: self.known_list(),
            })?;

        debug!(agent_id = %agent_id, seed = ?settings.seed, "instantiating agent");
        Ok(factory(settings))
    }

    fn known_list(&self) -> String {
        if self.factories.is_empty() {
            return "none".to_string();
        }
        self.factories
            .keys()
            .map(AgentId::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Debug for AgentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentRegistry")
            .field("identifiers", &self.identifiers())
            .finish()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
