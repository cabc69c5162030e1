//! Engine exchange messages.
//!
//! The session talks to the engine in JSON lines: one object per line, each
//! carrying a numeric `id` and a `type` discriminant. Every reply echoes the
//! `id` of the message it answers.
//!
//! ```text
//! engine → {"id":1,"type":"init","state":{…},"budget_ms":1000}
//! client ← {"id":1,"type":"ready"}
//! engine → {"id":2,"type":"act","state":{…},"budget_ms":40}
//! client ← {"id":2,"type":"action","action":"ACTION_LEFT"}
//! engine → {"id":9,"type":"result","state":{…},"budget_ms":1000}
//! client ← {"id":9,"type":"next_level","level":null}
//! engine → {"id":10,"type":"end"}
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::{ClientError, ClientResult},
    game::{Action, Observation},
};

/// A message sent by the engine, with its correlation id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineEnvelope {
    pub id: u64,
    #[serde(flatten)]
    pub message: EngineMessage,
}

/// The kinds of message the engine sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineMessage {
    /// A new game is starting. The agent may prepare within `budget_ms`.
    Init { state: Observation, budget_ms: u64 },
    /// The engine needs the next action within `budget_ms`.
    Act { state: Observation, budget_ms: u64 },
    /// The game finished; `state` is the final observation.
    Result { state: Observation, budget_ms: u64 },
    /// The engine abandoned the current game. No reply is expected.
    Abort,
    /// The match is over. No reply is expected.
    End,
}

impl EngineMessage {
    /// Short name used in logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineMessage::Init { .. } => "init",
            EngineMessage::Act { .. } => "act",
            EngineMessage::Result { .. } => "result",
            EngineMessage::Abort => "abort",
            EngineMessage::End => "end",
        }
    }
}

/// A reply sent by the client, with the id of the message it answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientEnvelope {
    pub id: u64,
    #[serde(flatten)]
    pub reply: ClientReply,
}

/// The kinds of reply the client sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientReply {
    /// The agent finished initialising.
    Ready,
    /// The agent's decision for the current tick.
    Action { action: Action },
    /// Level the agent wants to play next; `None` leaves the choice to the engine.
    NextLevel { level: Option<u32> },
}

/// Decode one line received from the engine.
///
/// Returns `ClientError::Protocol` if the line is not a valid engine message.
pub fn decode_engine_line(line: &str) -> ClientResult<EngineEnvelope> {
    serde_json::from_str(line.trim()).map_err(|e| ClientError::Protocol {
        reason: format!("malformed engine message: {e}"),
    })
}

/// Encode a reply as a single line, without the trailing newline.
pub fn encode_client_line(envelope: &ClientEnvelope) -> ClientResult<String> {
    serde_json::to_string(envelope).map_err(|e| ClientError::Protocol {
        reason: format!("failed to encode reply {}: {e}", envelope.id),
    })
}
