//! Session-level records.
//!
//! `MatchSummary` is what a session keeps about the match it drove. It is
//! informational: nothing in the bootstrap reads it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    agent::{AgentId, SessionId},
    game::Winner,
};

/// Counters and outcome of one session with the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    /// The session that produced this summary.
    pub session_id: SessionId,
    /// The agent that played.
    pub agent_id: AgentId,
    /// Number of `init` messages answered.
    pub games_started: u32,
    /// Number of `result` messages answered.
    pub games_finished: u32,
    /// Number of games the engine aborted.
    pub games_aborted: u32,
    /// Number of actions sent.
    pub actions_sent: u64,
    /// Number of decisions that took longer than their budget.
    pub budget_overruns: u64,
    /// Score reported in the most recent `result`.
    pub last_score: Option<f64>,
    /// Winner reported in the most recent `result`.
    pub last_winner: Option<Winner>,
    /// Wall-clock time the session opened its transport (UTC).
    pub started_at: DateTime<Utc>,
    /// Wall-clock time the engine ended the match (UTC).
    pub finished_at: Option<DateTime<Utc>>,
}

impl MatchSummary {
    /// An empty summary for a session that is about to start.
    pub fn new(session_id: SessionId, agent_id: AgentId) -> Self {
        Self {
            session_id,
            agent_id,
            games_started: 0,
            games_finished: 0,
            games_aborted: 0,
            actions_sent: 0,
            budget_overruns: 0,
            last_score: None,
            last_winner: None,
            started_at: Utc::now(),
            finished_at: None,
        }
    }
}
