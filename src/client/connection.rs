//! Connection Handler
//!
//! Owns the TCP stream for a single request.

use std::net::{SocketAddr, TcpStream, ToSocketAddrs};

use crate::config::Config;
use crate::error::{ProbeError, Result};
use crate::protocol::{read_response_chunk, write_command, Command, Response};

/// A connection to the peer
///
/// Born connected (the only constructor is [`Connection::connect`]) and
/// closed either explicitly via [`Connection::close`] or implicitly on
/// drop. Data may only be sent or received while the connection is open;
/// operations on a closed connection fail, never silently succeed.
pub struct Connection {
    /// The underlying stream; `None` once closed
    stream: Option<TcpStream>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Establish a TCP connection to the configured peer
    ///
    /// With `connect_timeout` set, the attempt is bounded; otherwise it
    /// blocks until the OS gives up. A configured `read_timeout` is applied
    /// to the stream so a later receive cannot block forever.
    pub fn connect(config: &Config) -> Result<Self> {
        let addr = config.addr();
        let socket_addr = resolve(&addr)?;

        let stream = match config.connect_timeout {
            Some(timeout) => TcpStream::connect_timeout(&socket_addr, timeout),
            None => TcpStream::connect(socket_addr),
        }
        .map_err(ProbeError::Connection)?;

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true).map_err(ProbeError::Connection)?;

        stream
            .set_read_timeout(config.read_timeout)
            .map_err(ProbeError::Connection)?;

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| addr.clone());

        tracing::debug!("Connected to {}", peer_addr);

        Ok(Self {
            stream: Some(stream),
            peer_addr,
        })
    }

    /// Send a command to the peer
    ///
    /// Writes exactly one byte. Fails with a transmission error if the
    /// connection is closed or the transport reports a write failure.
    /// Successful return only means the byte reached the transport layer.
    pub fn send_command(&mut self, command: Command) -> Result<()> {
        let stream = self.stream.as_mut().ok_or_else(ProbeError::closed_for_send)?;

        tracing::trace!("Sending command 0x{:02x} to {}", command.code(), self.peer_addr);
        write_command(stream, command)
    }

    /// Receive one chunk of response data
    ///
    /// Blocks until the peer sends data or closes, then returns the 0 to
    /// `max_bytes` bytes of that single delivery. A peer that closes
    /// without writing yields an empty response, not an error.
    pub fn receive_response(&mut self, max_bytes: usize) -> Result<Response> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(ProbeError::closed_for_receive)?;

        let response = read_response_chunk(stream, max_bytes)?;
        tracing::trace!(
            "Received {} response bytes from {}",
            response.len(),
            self.peer_addr
        );
        Ok(response)
    }

    /// Close the connection and release the socket
    ///
    /// Idempotent: closing an already-closed connection is a no-op.
    pub fn close(&mut self) {
        if let Some(_stream) = self.stream.take() {
            tracing::debug!("Closed connection to {}", self.peer_addr);
        }
    }

    /// True once the connection has been closed
    pub fn is_closed(&self) -> bool {
        self.stream.is_none()
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

/// Resolve `host:port` to a socket address
///
/// Takes the first resolved address; a probe targets one peer, not a pool.
fn resolve(addr: &str) -> Result<SocketAddr> {
    let mut addrs = addr.to_socket_addrs().map_err(|e| ProbeError::Address {
        addr: addr.to_string(),
        reason: e.to_string(),
    })?;

    addrs.next().ok_or_else(|| ProbeError::Address {
        addr: addr.to_string(),
        reason: "resolved to no addresses".to_string(),
    })
}
