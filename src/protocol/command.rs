//! Command definitions
//!
//! Represents commands sent to the peer.

/// Wire code for the FLUSH command
pub const FLUSH_CODE: u8 = 0x04;

/// A single-byte command
///
/// The client enforces no registry of valid codes: any value 0-255 is legal
/// to send, and semantic validity is the peer's responsibility. Codes the
/// client knows about get named variants; everything else is `Raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Ask the peer to flush/persist buffered state (code 0x04)
    Flush,

    /// Any other command code, opaque to this client
    Raw(u8),
}

impl Command {
    /// Build a command from its wire code
    ///
    /// Total over all of u8: known codes map to their named variant, the
    /// rest to `Raw`.
    pub fn from_code(code: u8) -> Self {
        match code {
            FLUSH_CODE => Command::Flush,
            other => Command::Raw(other),
        }
    }

    /// The single byte that goes on the wire
    pub fn code(&self) -> u8 {
        match self {
            Command::Flush => FLUSH_CODE,
            Command::Raw(code) => *code,
        }
    }
}
