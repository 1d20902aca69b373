//! Protocol Module
//!
//! Defines the client side of the byte-oriented wire protocol.
//!
//! ## Wire Format
//!
//! ### Request Format
//! ```text
//! ┌──────────┐
//! │ Cmd (1)  │
//! └──────────┘
//! ```
//!
//! One unsigned byte per command. No framing, no length prefix, no checksum.
//!
//! ### Commands
//! - 0x04: FLUSH - ask the peer to flush/persist buffered state
//!
//! All other codes are reserved for the peer's own protocol definition and
//! are opaque to this client.
//!
//! ### Response Format
//!
//! Unstructured byte stream. The peer replies with any byte sequence
//! (including empty); this client performs no parsing. How a reader knows a
//! logical response is complete is undefined by the protocol, so reception
//! is a single-shot read (see [`codec::read_response_chunk`]).

mod command;
mod response;
pub mod codec;

pub use command::Command;
pub use response::Response;
pub use codec::{read_response_chunk, write_command};
