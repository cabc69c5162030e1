//! Error types for the GVGAI agent client.
//!
//! All fallible operations in the workspace return `ClientResult<T>`.
//! Only the process entry point turns a `ClientError` into an exit status.

use thiserror::Error;

/// The unified error type for the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The agent name given to the bootstrap was empty or absent.
    ///
    /// This is the only error the bootstrap itself raises.
    #[error("missing agent name")]
    MissingAgentName,

    /// No agent is registered under the requested identifier.
    #[error("unknown agent '{identifier}' (known agents: {known})")]
    UnknownAgent { identifier: String, known: String },

    /// A configuration file or value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The transport to the engine could not be opened, read, or written.
    #[error("transport error: {reason}")]
    Transport { reason: String },

    /// The engine closed the connection before the match ended.
    #[error("engine closed the connection during {phase}")]
    ConnectionClosed { phase: String },

    /// The engine sent something the session could not understand.
    #[error("protocol error: {reason}")]
    Protocol { reason: String },

    /// `Session::start()` was called on a session that already ran.
    #[error("session {session_id} was already started")]
    AlreadyStarted { session_id: String },

    /// The agent's own logic returned an error.
    #[error("agent failed: {reason}")]
    AgentFailed { reason: String },
}

impl ClientError {
    /// True for errors detected by the bootstrap before any session exists.
    pub fn is_bootstrap_error(&self) -> bool {
        matches!(self, ClientError::MissingAgentName)
    }
}

/// Convenience alias used throughout the client crates.
pub type ClientResult<T> = Result<T, ClientError>;
