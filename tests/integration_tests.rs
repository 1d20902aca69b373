//! Integration tests for nanoprobe
//!
//! The peer server is not part of this crate, so every end-to-end test
//! spins up a stub peer: a `TcpListener` on an ephemeral port serviced by
//! one thread running a scripted handler.

use std::io::{Cursor, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use nanoprobe::protocol::{read_response_chunk, write_command};
use nanoprobe::{Command, Config, Connection, ProbeError, ProbeClient};

// =============================================================================
// Stub Peer
// =============================================================================

/// Start a one-connection stub peer and return its address
fn stub_peer<F>(handler: F) -> (SocketAddr, JoinHandle<()>)
where
    F: FnOnce(TcpStream) + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub peer");
    let addr = listener.local_addr().expect("stub peer addr");

    let handle = thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            handler(stream);
        }
    });

    (addr, handle)
}

fn config_for(addr: SocketAddr) -> Config {
    Config::builder()
        .host(addr.ip().to_string())
        .port(addr.port())
        .connect_timeout(Duration::from_secs(5))
        .build()
}

// =============================================================================
// End-to-End Probe Tests
// =============================================================================

#[test]
fn test_flush_round_trip() {
    let (addr, peer) = stub_peer(|mut stream| {
        let mut cmd = [0u8; 1];
        stream.read_exact(&mut cmd).expect("read command byte");
        assert_eq!(cmd[0], 4, "stub peer expected FLUSH");
        stream.write_all(b"OK").expect("write reply");
    });

    let client = ProbeClient::new(config_for(addr));
    let response = client.probe(Command::Flush).expect("probe");

    assert_eq!(response.as_bytes(), b"OK");
    peer.join().expect("stub peer");
}

#[test]
fn test_raw_command_code_is_sent_verbatim() {
    // Stub echoes the command byte back, so the response reveals what
    // actually went on the wire
    let (addr, peer) = stub_peer(|mut stream| {
        let mut cmd = [0u8; 1];
        stream.read_exact(&mut cmd).expect("read command byte");
        stream.write_all(&cmd).expect("write reply");
    });

    let client = ProbeClient::new(config_for(addr));
    let response = client.probe(Command::from_code(0xAB)).expect("probe");

    assert_eq!(response.as_bytes(), &[0xAB]);
    peer.join().expect("stub peer");
}

#[test]
fn test_connect_refused_fails_with_connection_error() {
    // Bind then drop to get a port with nobody listening
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr")
    };

    let config = Config::builder()
        .host(addr.ip().to_string())
        .port(addr.port())
        .connect_timeout(Duration::from_millis(500))
        .build();

    let start = Instant::now();
    let err = Connection::connect(&config).err().expect("connect must fail");

    assert!(matches!(err, ProbeError::Connection(_)), "got {:?}", err);
    assert!(
        start.elapsed() < Duration::from_secs(5),
        "connect failure not bounded by timeout"
    );
}

#[test]
fn test_peer_closing_without_writing_yields_empty_response() {
    let (addr, peer) = stub_peer(|mut stream| {
        // Drain the command byte so closing does not reset the connection
        let mut cmd = [0u8; 1];
        let _ = stream.read_exact(&mut cmd);
    });

    let config = config_for(addr);
    let mut conn = Connection::connect(&config).expect("connect");
    conn.send_command(Command::Flush).expect("send");

    let response = conn.receive_response(1024).expect("receive");
    assert!(response.is_empty());

    conn.close();
    peer.join().expect("stub peer");
}

#[test]
fn test_peer_closing_immediately_races_with_send() {
    let (addr, peer) = stub_peer(|stream| {
        // Close without reading or writing
        drop(stream);
    });

    let config = config_for(addr);
    let mut conn = Connection::connect(&config).expect("connect");
    peer.join().expect("stub peer");

    // The byte may already be buffered by the transport before the peer's
    // close takes effect, so both outcomes are legal
    match conn.send_command(Command::Flush) {
        Ok(()) => {}
        Err(ProbeError::Transmission(_)) => {}
        Err(e) => panic!("unexpected error kind: {:?}", e),
    }

    conn.close();
}

#[test]
fn test_receive_never_exceeds_max_bytes() {
    let (addr, peer) = stub_peer(|mut stream| {
        let mut cmd = [0u8; 1];
        stream.read_exact(&mut cmd).expect("read command byte");
        stream.write_all(&[0x55; 64]).expect("write reply");
    });

    let config = config_for(addr);
    let mut conn = Connection::connect(&config).expect("connect");
    conn.send_command(Command::Flush).expect("send");

    let response = conn.receive_response(16).expect("receive");
    assert!(!response.is_empty());
    assert!(response.len() <= 16);

    conn.close();
    peer.join().expect("stub peer");
}

#[test]
fn test_read_timeout_surfaces_as_reception_error() {
    let (addr, _peer) = stub_peer(|mut stream| {
        let mut cmd = [0u8; 1];
        let _ = stream.read_exact(&mut cmd);
        // Hold the connection open without ever replying
        thread::sleep(Duration::from_secs(5));
    });

    let config = Config::builder()
        .host(addr.ip().to_string())
        .port(addr.port())
        .connect_timeout(Duration::from_secs(5))
        .read_timeout(Duration::from_millis(200))
        .build();

    let mut conn = Connection::connect(&config).expect("connect");
    conn.send_command(Command::Flush).expect("send");

    let err = conn.receive_response(1024).err().expect("receive must time out");
    assert!(matches!(err, ProbeError::Reception(_)), "got {:?}", err);

    conn.close();
}

// =============================================================================
// Connection Lifecycle Tests
// =============================================================================

#[test]
fn test_close_is_idempotent() {
    let (addr, peer) = stub_peer(|_stream| {});

    let config = config_for(addr);
    let mut conn = Connection::connect(&config).expect("connect");

    conn.close();
    assert!(conn.is_closed());
    conn.close();
    assert!(conn.is_closed());

    peer.join().expect("stub peer");
}

#[test]
fn test_send_on_closed_connection_fails() {
    let (addr, peer) = stub_peer(|_stream| {});

    let config = config_for(addr);
    let mut conn = Connection::connect(&config).expect("connect");
    conn.close();

    let err = conn.send_command(Command::Flush).err().expect("send must fail");
    assert!(matches!(err, ProbeError::Transmission(_)), "got {:?}", err);

    peer.join().expect("stub peer");
}

#[test]
fn test_receive_on_closed_connection_fails() {
    let (addr, peer) = stub_peer(|_stream| {});

    let config = config_for(addr);
    let mut conn = Connection::connect(&config).expect("connect");
    conn.close();

    let err = conn.receive_response(1024).err().expect("receive must fail");
    assert!(matches!(err, ProbeError::Reception(_)), "got {:?}", err);

    peer.join().expect("stub peer");
}

// =============================================================================
// Protocol Tests
// =============================================================================

#[test]
fn test_command_codes() {
    assert_eq!(Command::Flush.code(), 4);
    assert_eq!(Command::from_code(4), Command::Flush);
    assert_eq!(Command::from_code(0), Command::Raw(0));
    assert_eq!(Command::from_code(255).code(), 255);
}

#[test]
fn test_write_command_emits_exactly_one_byte() {
    let mut wire = Vec::new();
    write_command(&mut wire, Command::Flush).expect("write");
    assert_eq!(wire, vec![4u8]);

    let mut wire = Vec::new();
    write_command(&mut wire, Command::Raw(0x7F)).expect("write");
    assert_eq!(wire, vec![0x7Fu8]);
}

#[test]
fn test_read_response_chunk_caps_at_max_bytes() {
    let mut reader = Cursor::new(vec![1u8, 2, 3, 4, 5]);
    let response = read_response_chunk(&mut reader, 3).expect("read");
    assert_eq!(response.as_bytes(), &[1, 2, 3]);
}

#[test]
fn test_read_response_chunk_returns_empty_on_eof() {
    let mut reader = Cursor::new(Vec::<u8>::new());
    let response = read_response_chunk(&mut reader, 1024).expect("read");
    assert!(response.is_empty());
    assert_eq!(response.len(), 0);
}
