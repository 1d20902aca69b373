//! Protocol codec
//!
//! Stream-based I/O helpers for the wire protocol.
//!
//! The request side is trivial: one byte per command. The response side has
//! no framing at all, so reads are deliberately single-shot: one underlying
//! `read` call, returning whatever that delivery contained. Looping to
//! assemble a "complete" message would require inventing framing the
//! protocol does not define.

use std::io::{Read, Write};

use crate::error::{ProbeError, Result};
use super::{Command, Response};

/// Write a command to a stream
///
/// Writes exactly one byte and flushes. Successful return means the byte
/// was handed to the transport layer, not that the peer received it.
pub fn write_command<W: Write>(writer: &mut W, command: Command) -> Result<()> {
    writer
        .write_all(&[command.code()])
        .map_err(ProbeError::Transmission)?;
    writer.flush().map_err(ProbeError::Transmission)?;
    Ok(())
}

/// Read one response chunk from a stream
///
/// Blocks until the peer sends data or closes, then returns the 0 to
/// `max_bytes` bytes of that single delivery. A clean close with no data
/// yields an empty response. Never loops to accumulate more bytes.
pub fn read_response_chunk<R: Read>(reader: &mut R, max_bytes: usize) -> Result<Response> {
    let mut buf = vec![0u8; max_bytes];
    let n = reader.read(&mut buf).map_err(ProbeError::Reception)?;
    buf.truncate(n);
    Ok(Response::from(buf))
}
