//! `SessionFactory` backed by an agent registry and a session configuration.
//!
//! The agent is resolved and instantiated in `construct`, so an unknown
//! identifier fails before any connection is attempted. The transport is
//! opened later, by `Session::start()`.

use tracing::debug;

use gvgai_contracts::{agent::AgentId, error::ClientResult};
use gvgai_core::{
    traits::{Session, SessionFactory},
    AgentRegistry,
};

use crate::{
    config::SessionConfig,
    session::{ClientSession, Connector},
    transport,
};

/// Builds `ClientSession`s for agents in `registry`, configured by `config`.
#[derive(Debug)]
pub struct ClientSessionFactory {
    registry: AgentRegistry,
    config: SessionConfig,
}

impl ClientSessionFactory {
    pub fn new(registry: AgentRegistry, config: SessionConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Build the concrete session for `agent_id`.
    ///
    /// Returns `ClientError::UnknownAgent` if the registry has no such agent.
    pub fn build(&self, agent_id: &AgentId) -> ClientResult<ClientSession> {
        let agent = self.registry.instantiate(agent_id, &self.config.agent)?;

        let engine = self.config.engine.clone();
        debug!(
            agent_id = %agent_id,
            transport = ?engine.transport,
            host = %engine.host,
            port = engine.port,
            "session constructed"
        );
        let connector: Connector = Box::new(move || transport::open(&engine));

        Ok(ClientSession::new(agent_id.clone(), agent, connector))
    }
}

impl SessionFactory for ClientSessionFactory {
    fn construct(&self, agent_id: &AgentId) -> ClientResult<Box<dyn Session>> {
        Ok(Box::new(self.build(agent_id)?))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
