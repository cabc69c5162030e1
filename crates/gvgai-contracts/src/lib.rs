//! # gvgai-contracts
//!
//! Shared types, wire messages, and errors for the GVGAI agent client.
//!
//! All crates in the workspace import from here. No session or agent logic
//! lives in this crate, only data definitions, the line codec, and the
//! error type.

pub mod agent;
pub mod error;
pub mod game;
pub mod message;
pub mod session;
