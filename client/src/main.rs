//! GVGAI Agent Client
//!
//! Resolves an agent by name and plays one match against the engine with it.
//!
//! Usage:
//!   cargo run -p gvgai-client                       # default agent, Agents.Agent
//!   cargo run -p gvgai-client -- sampleRandom       # runs sampleRandom.Agent
//!   cargo run -p gvgai-client -- doNothing --port 3000 --seed 7
//!   cargo run -p gvgai-client -- --list-agents

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gvgai_agents::builtin_registry;
use gvgai_contracts::error::{ClientError, ClientResult};
use gvgai_core::Bootstrap;
use gvgai_session::{ClientSessionFactory, SessionConfig, TransportKind};

// ── CLI definition ────────────────────────────────────────────────────────────

/// GVGAI agent client.
///
/// The first positional argument names the agent; `.Agent` is appended to
/// form its identifier. Without one, the default random agent runs.
#[derive(Parser, Debug)]
#[command(
    name = "gvgai-client",
    about = "Play a GVGAI match with a named agent",
    long_about = "Resolves <AGENT> to the identifier <AGENT>.Agent, connects to the engine,\n\
                  and plays until the engine ends the match. Without <AGENT>, runs Agents.Agent."
)]
struct Cli {
    /// Base name of the agent to run (e.g. sampleRandom).
    agent: Option<String>,

    /// Further positional arguments are accepted and ignored.
    #[arg(hide = true)]
    ignored: Vec<String>,

    /// TOML session configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Engine host (overrides the config file).
    #[arg(long)]
    host: Option<String>,

    /// Engine port (overrides the config file).
    #[arg(long)]
    port: Option<u16>,

    /// Talk to the engine over stdin/stdout instead of TCP.
    #[arg(long)]
    stdio: bool,

    /// Seed for agents that make random choices.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the registered agent identifiers and exit.
    #[arg(long)]
    list_agents: bool,
}

impl Cli {
    /// The invocation arguments the bootstrap consults.
    fn agent_args(&self) -> Vec<String> {
        self.agent.iter().cloned().collect()
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    // Logs go to stderr so they never mix with a stdio transport.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(exit_code(&e));
        }
    };

    let registry = builtin_registry();
    if cli.list_agents {
        for agent_id in registry.identifiers() {
            println!("{}", agent_id);
        }
        return;
    }

    // With the stdio transport, stdout belongs to the engine.
    let stdio = config.engine.transport == TransportKind::Stdio;
    let args = cli.agent_args();

    diagnostic(stdio, &format!("Run with agent: {}", Bootstrap::agent_name(&args)));
    diagnostic(stdio, "start client");

    debug!(config = ?config, "starting client");
    let bootstrap = Bootstrap::new(Box::new(ClientSessionFactory::new(registry, config)));

    if let Err(e) = bootstrap.run(&args) {
        eprintln!("{}", failure_message(&e));
        std::process::exit(exit_code(&e));
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Read the config file, if any, then apply command-line overrides.
fn load_config(cli: &Cli) -> ClientResult<SessionConfig> {
    let mut config = match &cli.config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    };

    if let Some(host) = &cli.host {
        config.engine.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.engine.port = port;
    }
    if cli.stdio {
        config.engine.transport = TransportKind::Stdio;
    }
    if cli.seed.is_some() {
        config.agent.seed = cli.seed;
    }
    config.validate()?;
    Ok(config)
}

/// Exit status for a failed run: 2 for a bad invocation, 1 for everything else.
fn exit_code(error: &ClientError) -> i32 {
    if error.is_bootstrap_error() {
        2
    } else {
        1
    }
}

/// Diagnostic for a failed run: bad invocations are reported as `ERROR`.
fn failure_message(error: &ClientError) -> String {
    if error.is_bootstrap_error() {
        format!("ERROR: {}", error)
    } else {
        format!("Client error: {}", error)
    }
}

/// Print an informational line. Nothing parses these.
fn diagnostic(stdio: bool, message: &str) {
    if stdio {
        eprintln!("{}", message);
    } else {
        println!("{}", message);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use clap::Parser;

    use gvgai_contracts::error::ClientError;
    use gvgai_core::Bootstrap;
    use gvgai_session::{EngineConfig, TransportKind};

    use super::{exit_code, failure_message, load_config, Cli};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gvgai-client").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_arguments_resolves_default_agent() {
        let cli = parse(&[]);
        assert!(cli.agent_args().is_empty());

        let agent_id = Bootstrap::resolve(&cli.agent_args()).unwrap();
        assert_eq!(agent_id.as_str(), "Agents.Agent");
    }

    #[test]
    fn first_positional_names_the_agent() {
        let cli = parse(&["SampleAgent", "extra", "more"]);

        assert_eq!(cli.agent_args(), vec!["SampleAgent".to_string()]);
        assert_eq!(Bootstrap::resolve(&cli.agent_args()).unwrap().as_str(), "SampleAgent.Agent");
    }

    #[test]
    fn flags_after_extra_positionals_still_apply() {
        let cli = parse(&["doNothing", "extra", "--port", "4040", "--list-agents"]);

        assert_eq!(cli.agent_args(), vec!["doNothing".to_string()]);
        assert_eq!(cli.port, Some(4040));
        assert!(cli.list_agents);
        assert_eq!(load_config(&cli).unwrap().engine.port, 4040);
    }

    #[test]
    fn empty_agent_name_is_a_bootstrap_error() {
        let cli = parse(&[""]);

        match Bootstrap::resolve(&cli.agent_args()) {
            Err(e @ ClientError::MissingAgentName) => {
                assert_eq!(exit_code(&e), 2);
                assert_eq!(failure_message(&e), "ERROR: missing agent name");
            }
            other => panic!("expected MissingAgentName, got {:?}", other),
        }
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse(&["--host", "engine.local", "--port", "4040", "--seed", "5", "doNothing"]);
        let config = load_config(&cli).unwrap();

        assert_eq!(config.engine.host, "engine.local");
        assert_eq!(config.engine.port, 4040);
        assert_eq!(config.engine.transport, TransportKind::Tcp);
        assert_eq!(config.agent.seed, Some(5));
        assert_eq!(cli.agent.as_deref(), Some("doNothing"));
    }

    #[test]
    fn stdio_flag_selects_stdio_transport() {
        let config = load_config(&parse(&["--stdio"])).unwrap();

        assert_eq!(config.engine.transport, TransportKind::Stdio);
        assert_eq!(config.engine.port, EngineConfig::DEFAULT_PORT);
    }

    #[test]
    fn missing_config_file_is_config_error() {
        let cli = parse(&["--config", "/nonexistent/gvgai-client.toml"]);

        match load_config(&cli) {
            Err(e @ ClientError::ConfigError { .. }) => assert_eq!(exit_code(&e), 1),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn blank_host_override_is_rejected() {
        let cli = parse(&["--host", "  "]);

        assert!(matches!(load_config(&cli), Err(ClientError::ConfigError { .. })));
    }

    #[test]
    fn session_errors_exit_with_one() {
        let err = ClientError::ConnectionClosed {
            phase: "game".to_string(),
        };
        assert_eq!(exit_code(&err), 1);
        assert!(failure_message(&err).starts_with("Client error: "));
    }
}
