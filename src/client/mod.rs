//! Client Module
//!
//! TCP connection handling and the one-shot probe sequence.
//!
//! ## Architecture
//! - One connection per request, exclusively owned by its call sequence
//! - Purely sequential: connect -> send -> receive -> close
//! - Concurrent probes use independent connections

mod connection;
mod probe;

pub use connection::Connection;
pub use probe::ProbeClient;
