//! # gvgai-core
//!
//! The seams of the GVGAI agent client and the bootstrap that joins them.
//!
//! This crate provides:
//! - The four core traits (`Agent`, `Session`, `SessionFactory`, `Transport`)
//! - The `AgentRegistry` that maps identifiers to agent factories
//! - The `Bootstrap` that turns process arguments into a started session
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gvgai_core::{Bootstrap, traits::SessionFactory};
//!
//! let bootstrap = Bootstrap::new(Box::new(factory));
//! bootstrap.run(&std::env::args().skip(1).collect::<Vec<_>>())?;
//! ```

pub mod bootstrap;
pub mod registry;
pub mod traits;

pub use bootstrap::Bootstrap;
pub use registry::{AgentFactory, AgentRegistry};
