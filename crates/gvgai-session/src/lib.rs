//! # gvgai-session
//!
//! The communication session between a local agent and the GVGAI engine.
//!
//! ## Overview
//!
//! [`ClientSessionFactory`] implements
//! [`SessionFactory`](gvgai_core::traits::SessionFactory): it resolves the
//! agent identifier against an [`AgentRegistry`](gvgai_core::AgentRegistry)
//! and returns a [`ClientSession`] bound to the transport described by a
//! [`SessionConfig`].  The session connects when started and answers engine
//! messages until the engine ends the match.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use gvgai_session::{ClientSessionFactory, SessionConfig};
//!
//! let config = SessionConfig::from_file(Path::new("client.toml"))?;
//! let factory = ClientSessionFactory::new(gvgai_agents::builtin_registry(), config);
//! // Pass `factory` to `gvgai_core::Bootstrap::new(...)`.
//! ```

pub mod config;
pub mod factory;
pub mod session;
pub mod transport;

pub use config::{EngineConfig, SessionConfig, TransportKind};
pub use factory::ClientSessionFactory;
pub use session::{ClientSession, Connector};
