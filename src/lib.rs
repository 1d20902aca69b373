//! # nanoprobe
//!
//! A minimal probe client for a byte-oriented command/response protocol
//! spoken over TCP:
//! - One connection per request
//! - One single-byte command per connection
//! - Single-shot read of the raw response
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐   connect    ┌──────────────┐
//! │  ProbeClient │─────────────▶│  Connection  │
//! └──────┬───────┘              └──────┬───────┘
//!        │ one command byte            │ TCP
//!        │ one response chunk          ▼
//!        │                      ┌──────────────┐
//!        └─────────────────────▶│  Peer server │  (external)
//!                               └──────────────┘
//! ```
//!
//! The peer server is an external collaborator: it accepts a connection,
//! reads one command byte, performs the corresponding action, and writes
//! back any byte sequence (including empty). This crate neither implements
//! the server nor parses its replies.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ProbeError, Result};
pub use config::Config;
pub use protocol::{Command, Response};
pub use client::{Connection, ProbeClient};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of nanoprobe
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
