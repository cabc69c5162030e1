//! Line transports to the engine.
//!
//! `LineTransport` wraps any buffered reader and writer pair. TCP and stdio
//! are both line transports; only how the pair is obtained differs.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::{debug, warn};

use gvgai_contracts::error::{ClientError, ClientResult};
use gvgai_core::traits::Transport;

use crate::config::{EngineConfig, TransportKind};

/// A `Transport` over a reader/writer pair, one message per line.
pub struct LineTransport<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead + Send, W: Write + Send> LineTransport<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead + Send, W: Write + Send> Transport for LineTransport<R, W> {
    fn recv_line(&mut self) -> ClientResult<Option<String>> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line).map_err(|e| ClientError::Transport {
            reason: format!("read failed: {}", e),
        })?;
        if n == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn send_line(&mut self, line: &str) -> ClientResult<()> {
        let write = |writer: &mut W| -> io::Result<()> {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()
        };
        write(&mut self.writer).map_err(|e| ClientError::Transport {
            reason: format!("write failed: {}", e),
        })
    }
}

/// Line transport over a TCP connection to the engine.
pub type TcpTransport = LineTransport<BufReader<TcpStream>, TcpStream>;

/// Line transport over this process's stdin and stdout.
pub type StdioTransport = LineTransport<BufReader<Stdin>, Stdout>;

/// Connect to `host:port`, trying each resolved address in turn.
///
/// Each attempt is bounded by `timeout`. Returns `ClientError::Transport`
/// naming the last failure if no address accepts the connection.
pub fn connect_tcp(host: &str, port: u16, timeout: Duration) -> ClientResult<TcpTransport> {
    let addrs = (host, port).to_socket_addrs().map_err(|e| ClientError::Transport {
        reason: format!("cannot resolve engine address '{}:{}': {}", host, port, e),
    })?;

    let mut last_error = None;
    for addr in addrs {
        debug!(%addr, timeout_ms = timeout.as_millis() as u64, "connecting to engine");
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(stream) => {
                if let Err(e) = stream.set_nodelay(true) {
                    warn!(%addr, error = %e, "cannot disable Nagle on engine stream");
                }
                let reader = stream.try_clone().map_err(|e| ClientError::Transport {
                    reason: format!("cannot clone engine stream: {}", e),
                })?;
                return Ok(LineTransport::new(BufReader::new(reader), stream));
            }
            Err(e) => {
                warn!(%addr, error = %e, "engine connection attempt failed");
                last_error = Some(e);
            }
        }
    }

    Err(ClientError::Transport {
        reason: match last_error {
            Some(e) => format!("cannot connect to engine at '{}:{}': {}", host, port, e),
            None => format!("engine address '{}:{}' resolved to nothing", host, port),
        },
    })
}

/// Open a transport over stdin/stdout.
pub fn stdio() -> StdioTransport {
    LineTransport::new(BufReader::new(io::stdin()), io::stdout())
}

/// Open the transport `config` describes.
pub fn open(config: &EngineConfig) -> ClientResult<Box<dyn Transport>> {
    match config.transport {
        TransportKind::Tcp => Ok(Box::new(connect_tcp(
            &config.host,
            config.port,
            config.connect_timeout(),
        )?)),
        TransportKind::Stdio => Ok(Box::new(stdio())),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Cursor, Write};
    use std::net::TcpListener;
    use std::thread;
    use std::time::Duration;

    use gvgai_contracts::error::ClientError;
    use gvgai_core::traits::Transport;

    use super::{connect_tcp, LineTransport};

    #[test]
    fn recv_strips_line_endings_and_reports_eof() {
        let input = Cursor::new(b"first\r\nsecond\nlast".to_vec());
        let mut transport = LineTransport::new(input, Vec::new());

        assert_eq!(transport.recv_line().unwrap().as_deref(), Some("first"));
        assert_eq!(transport.recv_line().unwrap().as_deref(), Some("second"));
        assert_eq!(transport.recv_line().unwrap().as_deref(), Some("last"));
        assert_eq!(transport.recv_line().unwrap(), None);
    }

    #[test]
    fn send_appends_newline() {
        let mut transport = LineTransport::new(Cursor::new(Vec::new()), Vec::new());
        transport.send_line("{\"id\":1,\"type\":\"ready\"}").unwrap();
        transport.send_line("second").unwrap();

        assert_eq!(
            String::from_utf8(transport.writer).unwrap(),
            "{\"id\":1,\"type\":\"ready\"}\nsecond\n"
        );
    }

    #[test]
    fn tcp_transport_exchanges_lines() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let engine = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            stream.write_all(b"hello\n").unwrap();
            let mut reply = String::new();
            BufReader::new(stream).read_line(&mut reply).unwrap();
            reply
        });

        let mut transport = connect_tcp("127.0.0.1", port, Duration::from_secs(2)).unwrap();
        assert_eq!(transport.recv_line().unwrap().as_deref(), Some("hello"));
        transport.send_line("world").unwrap();

        assert_eq!(engine.join().unwrap(), "world\n");
    }

    #[test]
    fn tcp_connect_to_closed_port_is_transport_error() {
        // Bind then drop to obtain a port nothing is listening on.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        match connect_tcp("127.0.0.1", port, Duration::from_millis(500)) {
            Err(ClientError::Transport { reason }) => {
                assert!(reason.contains("cannot connect to engine"), "got: {reason}");
            }
            Err(other) => panic!("expected Transport, got {:?}", other),
            Ok(_) => panic!("expected Transport, got a connection"),
        }
    }
}
