//! The bootstrap: from process arguments to a running session.
//!
//! The bootstrap has exactly two states:
//!
//!   awaiting-resolution → delegated
//!
//! It resolves the agent identifier, asks the `SessionFactory` for a session
//! bound to it, and calls `Session::start()` exactly once. Once `start` has
//! been called the bootstrap is done; it never retries and never inspects
//! what the session returns. Errors from construction or from `start` are
//! handed back to the caller unchanged.

use tracing::{debug, info};

use gvgai_contracts::{
    agent::{AgentId, DEFAULT_AGENT_BASE},
    error::ClientResult,
};

use crate::traits::SessionFactory;

/// Turns an invocation into a started session.
pub struct Bootstrap {
    factory: Box<dyn SessionFactory>,
}

impl Bootstrap {
    /// Create a bootstrap that builds sessions with `factory`.
    pub fn new(factory: Box<dyn SessionFactory>) -> Self {
        Self { factory }
    }

    /// Pick the agent base name from the invocation arguments.
    ///
    /// `args` excludes the program name. Only the first argument is consulted;
    /// when there is none, the default base name is used. An argument that is
    /// present but empty is returned as is and rejected later by `resolve`.
    pub fn agent_name(args: &[String]) -> &str {
        args.first().map(String::as_str).unwrap_or(DEFAULT_AGENT_BASE)
    }

    /// Resolve the fully qualified agent identifier for an invocation.
    ///
    /// Returns `ClientError::MissingAgentName` if the first argument is empty.
    pub fn resolve(args: &[String]) -> ClientResult<AgentId> {
        let name = Self::agent_name(args);
        debug!(agent_name = %name, arg_count = args.len(), "resolving agent identifier");
        AgentId::qualify(name)
    }

    /// Run the whole bootstrap for an invocation. This is what the client
    /// binary calls.
    pub fn run(&self, args: &[String]) -> ClientResult<()> {
        let agent_id = Self::resolve(args)?;
        self.launch(&agent_id)
    }

    /// Run the bootstrap for an explicit agent base name, for embedders and
    /// tests that already hold the name rather than an argument list.
    ///
    /// No default is substituted here: an empty `agent_name` fails with
    /// `ClientError::MissingAgentName` before any session is constructed.
    pub fn run_named(&self, agent_name: &str) -> ClientResult<()> {
        let agent_id = AgentId::qualify(agent_name)?;
        self.launch(&agent_id)
    }

    /// Construct the session for `agent_id` and start it once.
    pub fn launch(&self, agent_id: &AgentId) -> ClientResult<()> {
        let mut session = self.factory.construct(agent_id)?;

        info!(agent_id = %agent_id, "session constructed, delegating to session");
        session.start()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use gvgai_contracts::{
        agent::AgentId,
        error::{ClientError, ClientResult},
    };

    use crate::traits::{Session, SessionFactory};

    use super::Bootstrap;

    // ── Mock helpers ─────────────────────────────────────────────────────────

    /// What the mock session should do when started.
    #[derive(Clone, Copy)]
    enum StartOutcome {
        Succeed,
        ConnectionClosed,
    }

    /// Shared record of every construct and start call.
    #[derive(Default)]
    struct Calls {
        constructed: Vec<String>,
        started: Vec<String>,
    }

    struct MockSession {
        agent_id: String,
        outcome: StartOutcome,
        calls: Arc<Mutex<Calls>>,
    }

    impl Session for MockSession {
        fn start(&mut self) -> ClientResult<()> {
            self.calls.lock().unwrap().started.push(self.agent_id.clone());
            match self.outcome {
                StartOutcome::Succeed => Ok(()),
                StartOutcome::ConnectionClosed => Err(ClientError::ConnectionClosed {
                    phase: "act".to_string(),
                }),
            }
        }
    }

    struct MockFactory {
        outcome: StartOutcome,
        /// Identifiers this factory refuses to resolve.
        unknown: Vec<String>,
        calls: Arc<Mutex<Calls>>,
    }

    impl MockFactory {
        fn new(outcome: StartOutcome) -> Self {
            Self {
                outcome,
                unknown: vec![],
                calls: Arc::new(Mutex::new(Calls::default())),
            }
        }
    }

    impl SessionFactory for MockFactory {
        fn construct(&self, agent_id: &AgentId) -> ClientResult<Box<dyn Session>> {
            if self.unknown.iter().any(|u| u == agent_id.as_str()) {
                return Err(ClientError::UnknownAgent {
                    identifier: agent_id.to_string(),
                    known: "none".to_string(),
                });
            }
            self.calls.lock().unwrap().constructed.push(agent_id.to_string());
            Ok(Box::new(MockSession {
                agent_id: agent_id.to_string(),
                outcome: self.outcome,
                calls: Arc::clone(&self.calls),
            }))
        }
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    // ── Test cases ────────────────────────────────────────────────────────────

    /// A named agent resolves to "<name>.Agent" and is started exactly once.
    #[test]
    fn test_named_agent_starts_once() {
        let factory = MockFactory::new(StartOutcome::Succeed);
        let calls = Arc::clone(&factory.calls);
        let bootstrap = Bootstrap::new(Box::new(factory));

        bootstrap.run(&args(&["SampleAgent"])).unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.constructed, vec!["SampleAgent.Agent"]);
        assert_eq!(calls.started, vec!["SampleAgent.Agent"]);
    }

    /// No arguments falls back to the default random-policy agent.
    #[test]
    fn test_no_arguments_uses_default_agent() {
        let factory = MockFactory::new(StartOutcome::Succeed);
        let calls = Arc::clone(&factory.calls);
        let bootstrap = Bootstrap::new(Box::new(factory));

        bootstrap.run(&[]).unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.constructed, vec!["Agents.Agent"]);
        assert_eq!(calls.started.len(), 1);
    }

    /// An empty name at construction never builds or starts a session.
    #[test]
    fn test_empty_name_constructs_nothing() {
        let factory = MockFactory::new(StartOutcome::Succeed);
        let calls = Arc::clone(&factory.calls);
        let bootstrap = Bootstrap::new(Box::new(factory));

        let result = bootstrap.run_named("");

        assert!(matches!(result, Err(ClientError::MissingAgentName)));
        let calls = calls.lock().unwrap();
        assert!(calls.constructed.is_empty(), "no session may be constructed");
        assert!(calls.started.is_empty(), "start must never be called");
    }

    /// An empty first argument is not replaced by the default.
    #[test]
    fn test_empty_argument_is_missing_name() {
        let factory = MockFactory::new(StartOutcome::Succeed);
        let calls = Arc::clone(&factory.calls);
        let bootstrap = Bootstrap::new(Box::new(factory));

        let result = bootstrap.run(&args(&[""]));

        assert!(matches!(result, Err(ClientError::MissingAgentName)));
        assert!(calls.lock().unwrap().constructed.is_empty());
    }

    /// A non-empty name is suffixed verbatim, surrounding whitespace included.
    #[test]
    fn test_name_is_suffixed_verbatim() {
        let factory = MockFactory::new(StartOutcome::Succeed);
        let calls = Arc::clone(&factory.calls);
        let bootstrap = Bootstrap::new(Box::new(factory));

        bootstrap.run(&args(&[" SampleAgent"])).unwrap();
        bootstrap.run_named(" ").unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.constructed, vec![" SampleAgent.Agent", " .Agent"]);
        assert_eq!(calls.started.len(), 2);
    }

    /// Only the first argument is consulted.
    #[test]
    fn test_extra_arguments_are_ignored() {
        let id = Bootstrap::resolve(&args(&["doNothing", "--level", "3"])).unwrap();
        assert_eq!(id.as_str(), "doNothing.Agent");
    }

    /// A name that is already qualified is not suffixed twice.
    #[test]
    fn test_qualified_argument_is_not_suffixed_again() {
        let factory = MockFactory::new(StartOutcome::Succeed);
        let calls = Arc::clone(&factory.calls);
        let bootstrap = Bootstrap::new(Box::new(factory));

        bootstrap.run(&args(&["sampleRandom.Agent"])).unwrap();

        assert_eq!(calls.lock().unwrap().constructed, vec!["sampleRandom.Agent"]);
    }

    /// Many distinct names each resolve to name + suffix with one start each.
    #[test]
    fn test_every_non_empty_name_is_suffixed() {
        for name in ["a", "sampleMCTS", "tracks.singlePlayer.Sample", "x-1"] {
            let factory = MockFactory::new(StartOutcome::Succeed);
            let calls = Arc::clone(&factory.calls);
            Bootstrap::new(Box::new(factory)).run(&args(&[name])).unwrap();

            let calls = calls.lock().unwrap();
            assert_eq!(calls.constructed, vec![format!("{name}.Agent")]);
            assert_eq!(calls.started.len(), 1, "start must be called exactly once for {name}");
        }
    }

    /// Errors from start reach the caller unchanged, after exactly one start.
    #[test]
    fn test_session_error_propagates_unchanged() {
        let factory = MockFactory::new(StartOutcome::ConnectionClosed);
        let calls = Arc::clone(&factory.calls);
        let bootstrap = Bootstrap::new(Box::new(factory));

        match bootstrap.run(&[]) {
            Err(ClientError::ConnectionClosed { phase }) => assert_eq!(phase, "act"),
            other => panic!("expected ConnectionClosed, got {:?}", other),
        }
        assert_eq!(calls.lock().unwrap().started.len(), 1, "no retry after a failed start");
    }

    /// A factory that cannot resolve the identifier fails before any start.
    #[test]
    fn test_unknown_agent_is_the_factorys_error() {
        let mut factory = MockFactory::new(StartOutcome::Succeed);
        factory.unknown.push("ghost.Agent".to_string());
        let calls = Arc::clone(&factory.calls);
        let bootstrap = Bootstrap::new(Box::new(factory));

        match bootstrap.run(&args(&["ghost"])) {
            Err(ClientError::UnknownAgent { identifier, .. }) => assert_eq!(identifier, "ghost.Agent"),
            other => panic!("expected UnknownAgent, got {:?}", other),
        }
        assert!(calls.lock().unwrap().started.is_empty());
    }
}
