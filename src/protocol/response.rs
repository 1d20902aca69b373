//! Response definitions
//!
//! Represents the peer's reply to a command.

use bytes::Bytes;

/// An opaque response payload
///
/// Whatever bytes the peer delivered in one read: no length prefix,
/// terminator, or structure is assumed, and none is parsed. An empty
/// payload is a legal response (the peer closed without writing), not an
/// error. Callers must not assume the payload is a complete logical message
/// if the peer's reply could exceed the receive buffer or arrive in
/// multiple deliveries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    payload: Bytes,
}

impl Response {
    /// An empty response
    pub fn empty() -> Self {
        Self {
            payload: Bytes::new(),
        }
    }

    /// The raw payload bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.payload
    }

    /// Number of payload bytes
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// True if the peer sent no data before the read returned
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Consume the response, yielding the payload
    pub fn into_bytes(self) -> Bytes {
        self.payload
    }
}

impl From<Bytes> for Response {
    fn from(payload: Bytes) -> Self {
        Self { payload }
    }
}

impl From<Vec<u8>> for Response {
    fn from(payload: Vec<u8>) -> Self {
        Self {
            payload: Bytes::from(payload),
        }
    }
}
