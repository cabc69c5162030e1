//! Agent identity types.
//!
//! An agent is named on the command line by a short base name (`sampleRandom`)
//! and resolved by its fully qualified identifier (`sampleRandom.Agent`).
//! Every `AgentId`, including one read back through serde, has been through
//! `AgentId::qualify`, so every identifier that reaches a session has passed
//! the same check.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Suffix naming the agent entry point inside an agent package.
pub const AGENT_SUFFIX: &str = "Agent";

/// Base name used when the invocation names no agent.
///
/// Resolves to the reference random-policy agent.
pub const DEFAULT_AGENT_BASE: &str = "Agents";

/// Fully qualified identifier of an agent implementation.
///
/// Example: AgentId("sampleRandom.Agent")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AgentId(String);

impl AgentId {
    /// Qualify `base` by appending `.Agent`.
    ///
    /// Qualification is idempotent: a base that already ends in `.Agent` is
    /// returned as is. Any other text, whitespace included, is kept verbatim.
    ///
    /// Returns `ClientError::MissingAgentName` if `base` is empty or consists
    /// of the suffix alone.
    pub fn qualify(base: &str) -> ClientResult<Self> {
        let qualified_suffix = format!(".{AGENT_SUFFIX}");

        let stem = base.strip_suffix(qualified_suffix.as_str()).unwrap_or(base);
        if stem.is_empty() {
            return Err(ClientError::MissingAgentName);
        }

        Ok(Self(format!("{stem}{qualified_suffix}")))
    }

    /// The identifier the default invocation resolves to (`Agents.Agent`).
    pub fn default_agent() -> Self {
        Self::builtin(DEFAULT_AGENT_BASE)
    }

    /// Qualify a base name compiled into the client.
    ///
    /// `base` must be a non-empty name without the `.Agent` suffix.
    pub fn builtin(base: &'static str) -> Self {
        debug_assert!(!base.is_empty());
        Self(format!("{base}.{AGENT_SUFFIX}"))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The base name the identifier was qualified from.
    pub fn base_name(&self) -> &str {
        self.0
            .rsplit_once('.')
            .map(|(base, _)| base)
            .unwrap_or(&self.0)
    }
}

impl TryFrom<String> for AgentId {
    type Error = ClientError;

    fn try_from(value: String) -> ClientResult<Self> {
        Self::qualify(&value)
    }
}

impl From<AgentId> for String {
    fn from(id: AgentId) -> Self {
        id.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for one session with the engine.
///
/// Appears in every log line the session emits and in its `MatchSummary`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub uuid::Uuid);

impl SessionId {
    /// Create a new, unique session ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Settings handed to every agent factory when an agent is instantiated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSettings {
    /// Seed for agents that make random choices. `None` means seed from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}
