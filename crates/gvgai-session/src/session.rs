//! The communication session: one agent, one match, one transport.
//!
//! `ClientSession::start()` opens its transport and answers engine messages
//! until the engine sends `end`:
//!
//!   init → Agent::init → ready
//!   act → Agent::act → action
//!   result → Agent::result → next_level
//!   abort → (no reply)
//!   end → return
//!
//! The session never retries. Transport, protocol, and agent errors end the
//! session and are returned to the caller.

use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{debug, info, warn};

use gvgai_contracts::{
    agent::{AgentId, SessionId},
    error::{ClientError, ClientResult},
    message::{decode_engine_line, encode_client_line, ClientEnvelope, ClientReply, EngineMessage},
    session::MatchSummary,
};
use gvgai_core::traits::{Agent, Session, Transport};

/// Opens the transport when the session starts.
pub type Connector = Box<dyn FnOnce() -> ClientResult<Box<dyn Transport>> + Send>;

/// A session that drives one agent through a match.
pub struct ClientSession {
    session_id: SessionId,
    agent_id: AgentId,
    agent: Box<dyn Agent>,
    connector: Option<Connector>,
    summary: MatchSummary,
    in_game: bool,
}

impl ClientSession {
    /// Bind `agent` to a session. Nothing is opened until `start()`.
    pub fn new(agent_id: AgentId, agent: Box<dyn Agent>, connector: Connector) -> Self {
        let session_id = SessionId::new();
        let summary = MatchSummary::new(session_id.clone(), agent_id.clone());
        Self {
            session_id,
            agent_id,
            agent,
            connector: Some(connector),
            summary,
            in_game: false,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    /// Counters for the match so far.
    pub fn summary(&self) -> &MatchSummary {
        &self.summary
    }

    fn phase(&self) -> &'static str {
        if self.in_game {
            "game"
        } else if self.summary.games_started == 0 {
            "handshake"
        } else {
            "between games"
        }
    }

    /// Answer engine messages until `end`.
    fn play(&mut self, transport: &mut dyn Transport) -> ClientResult<()> {
        loop {
            let Some(line) = transport.recv_line()? else {
                warn!(
                    session_id = %self.session_id,
                    phase = self.phase(),
                    "engine closed the connection before the match ended"
                );
                return Err(ClientError::ConnectionClosed {
                    phase: self.phase().to_string(),
                });
            };
            if line.trim().is_empty() {
                continue;
            }

            let envelope = decode_engine_line(&line)?;
            debug!(
                session_id = %self.session_id,
                id = envelope.id,
                kind = envelope.message.kind(),
                "engine message received"
            );

            let reply = match envelope.message {
                EngineMessage::End => {
                    self.finish();
                    return Ok(());
                }
                message => self.handle(message)?,
            };

            if let Some(reply) = reply {
                let line = encode_client_line(&ClientEnvelope { id: envelope.id, reply })?;
                transport.send_line(&line)?;
            }
        }
    }

    /// Dispatch one message to the agent and build the reply, if any.
    fn handle(&mut self, message: EngineMessage) -> ClientResult<Option<ClientReply>> {
        match message {
            EngineMessage::Init { state, budget_ms } => {
                if self.in_game {
                    warn!(session_id = %self.session_id, "init received during a game, restarting");
                }
                let budget = Duration::from_millis(budget_ms);
                let started = Instant::now();
                self.agent.init(&state, budget)?;
                self.check_budget("init", started, budget);

                self.in_game = true;
                self.summary.games_started += 1;
                info!(
                    session_id = %self.session_id,
                    game = self.summary.games_started,
                    "game started"
                );
                Ok(Some(ClientReply::Ready))
            }

            EngineMessage::Act { state, budget_ms } => {
                self.require_game("act")?;
                let budget = Duration::from_millis(budget_ms);
                let started = Instant::now();
                let action = self.agent.act(&state, budget)?;
                self.check_budget("act", started, budget);

                self.summary.actions_sent += 1;
                debug!(
                    session_id = %self.session_id,
                    tick = state.game_tick,
                    action = %action,
                    "action chosen"
                );
                Ok(Some(ClientReply::Action { action }))
            }

            EngineMessage::Result { state, budget_ms } => {
                self.require_game("result")?;
                let budget = Duration::from_millis(budget_ms);
                let started = Instant::now();
                let level = self.agent.result(&state, budget)?;
                self.check_budget("result", started, budget);

                self.in_game = false;
                self.summary.games_finished += 1;
                self.summary.last_score = Some(state.game_score);
                self.summary.last_winner = Some(state.game_winner);
                info!(
                    session_id = %self.session_id,
                    score = state.game_score,
                    winner = ?state.game_winner,
                    ticks = state.game_tick,
                    next_level = ?level,
                    "game finished"
                );
                Ok(Some(ClientReply::NextLevel { level }))
            }

            EngineMessage::Abort => {
                warn!(session_id = %self.session_id, phase = self.phase(), "engine aborted the game");
                if self.in_game {
                    self.summary.games_aborted += 1;
                }
                self.in_game = false;
                Ok(None)
            }

            EngineMessage::End => Ok(None),
        }
    }

    fn require_game(&self, kind: &str) -> ClientResult<()> {
        if self.in_game {
            return Ok(());
        }
        Err(ClientError::Protocol {
            reason: format!("'{}' received outside a game (during {})", kind, self.phase()),
        })
    }

    /// Record, but do not enforce, a decision that ran past its budget.
    fn check_budget(&mut self, kind: &str, started: Instant, budget: Duration) {
        let elapsed = started.elapsed();
        if !budget.is_zero() && elapsed > budget {
            self.summary.budget_overruns += 1;
            warn!(
                session_id = %self.session_id,
                kind = kind,
                elapsed_ms = elapsed.as_millis() as u64,
                budget_ms = budget.as_millis() as u64,
                "agent exceeded its time budget"
            );
        }
    }

    fn finish(&mut self) {
        self.in_game = false;
        self.summary.finished_at = Some(Utc::now());
        info!(
            session_id = %self.session_id,
            agent_id = %self.agent_id,
            games_finished = self.summary.games_finished,
            games_aborted = self.summary.games_aborted,
            actions_sent = self.summary.actions_sent,
            budget_overruns = self.summary.budget_overruns,
            "match ended"
        );
    }
}

impl Session for ClientSession {
    fn start(&mut self) -> ClientResult<()> {
        let connector = self.connector.take().ok_or_else(|| ClientError::AlreadyStarted {
            session_id: self.session_id.to_string(),
        })?;

        let mut transport = connector()?;
        self.summary.started_at = Utc::now();
        info!(
            session_id = %self.session_id,
            agent_id = %self.agent_id,
            "connected to engine"
        );

        self.play(transport.as_mut())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
