//! Probe Client
//!
//! Performs one command/response exchange over a fresh connection.

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{Command, Response};
use super::Connection;

/// One-shot probe client
///
/// Each probe runs the full sequence on its own connection: connect, send
/// one command byte, single-shot read of the response, close. No retries
/// and no backoff: every failure surfaces to the caller, which is the point
/// of a diagnostic tool. Issue concurrent probes with independent
/// `ProbeClient` values.
pub struct ProbeClient {
    config: Config,
}

impl ProbeClient {
    /// Create a probe client with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create a probe client with default configuration
    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    /// The client's configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute one command/response exchange
    ///
    /// The returned bytes are whatever the peer delivered in one read, up
    /// to the configured receive buffer size; they are not guaranteed to be
    /// a complete logical response.
    pub fn probe(&self, command: Command) -> Result<Response> {
        let mut conn = Connection::connect(&self.config)?;

        let result = self.exchange(&mut conn, command);

        // Socket release happens on every exit path
        conn.close();
        result
    }

    fn exchange(&self, conn: &mut Connection, command: Command) -> Result<Response> {
        conn.send_command(command)?;
        conn.receive_response(self.config.receive_buffer_size)
    }
}
