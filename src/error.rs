//! Error types for nanoprobe
//!
//! Provides a unified error type for all operations.
//!
//! Every failure is terminal for the current probe attempt: there is no
//! internal retry or backoff. Callers retry by repeating the whole
//! connect/send/receive/close sequence.

use thiserror::Error;

/// Result type alias using ProbeError
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Unified error type for nanoprobe operations
#[derive(Debug, Error)]
pub enum ProbeError {
    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    /// The transport could not be established: peer unreachable, connection
    /// refused, or the connect attempt timed out.
    #[error("connection error: {0}")]
    Connection(#[source] std::io::Error),

    /// The configured host/port did not resolve to a usable socket address.
    #[error("invalid address {addr}: {reason}")]
    Address { addr: String, reason: String },

    // -------------------------------------------------------------------------
    // Transmission Errors
    // -------------------------------------------------------------------------
    /// The command byte could not be written: connection closed, broken
    /// pipe, reset, or any other transport write failure.
    #[error("transmission error: {0}")]
    Transmission(#[source] std::io::Error),

    // -------------------------------------------------------------------------
    // Reception Errors
    // -------------------------------------------------------------------------
    /// The response could not be read: connection closed, read timeout, or
    /// any other transport read failure.
    #[error("reception error: {0}")]
    Reception(#[source] std::io::Error),
}

impl ProbeError {
    /// Transmission error for a write attempted on a closed connection
    pub(crate) fn closed_for_send() -> Self {
        ProbeError::Transmission(std::io::Error::new(
            std::io::ErrorKind::NotConnected,
            "connection is closed",
        ))
    }

    /// Reception error for a read attempted on a closed connection
    pub(crate) fn closed_for_receive() -> Self {
        ProbeError::Reception(std::io::Error::new(
            std::io::ErrorKind::NotConnected,
            "connection is closed",
        ))
    }
}
