//! Configuration for nanoprobe
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

/// Configuration for a probe client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Peer Address
    // -------------------------------------------------------------------------
    /// Remote host to probe
    pub host: String,

    /// Remote TCP port
    pub port: u16,

    // -------------------------------------------------------------------------
    // Timeouts
    // -------------------------------------------------------------------------
    /// Connect timeout; `None` blocks indefinitely
    pub connect_timeout: Option<Duration>,

    /// Read timeout for the response; `None` blocks indefinitely
    pub read_timeout: Option<Duration>,

    // -------------------------------------------------------------------------
    // Buffers
    // -------------------------------------------------------------------------
    /// Size of the single-shot receive buffer (upper bound on how many
    /// response bytes one probe can return)
    pub receive_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            connect_timeout: None,
            read_timeout: None,
            receive_buffer_size: 1024,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The peer address in `host:port` form
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the remote host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the remote port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the connect timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    /// Set the read timeout
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_timeout = Some(timeout);
        self
    }

    /// Set the receive buffer size (in bytes)
    pub fn receive_buffer_size(mut self, size: usize) -> Self {
        self.config.receive_buffer_size = size;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
