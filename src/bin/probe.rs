//! nanoprobe CLI
//!
//! Sends a single command byte to a peer and prints the raw response.

use std::time::Duration;

use clap::{Parser, Subcommand};
use nanoprobe::{Command, Config, ProbeClient};
use tracing_subscriber::{fmt, EnvFilter};

/// nanoprobe CLI
#[derive(Parser, Debug)]
#[command(name = "nanoprobe")]
#[command(about = "Single-shot probe client for byte-command TCP protocols")]
#[command(version)]
struct Args {
    /// Remote host
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Remote port
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Connect timeout in milliseconds (0 = block indefinitely)
    #[arg(long, default_value = "0")]
    connect_timeout_ms: u64,

    /// Read timeout in milliseconds (0 = block indefinitely)
    #[arg(long, default_value = "0")]
    read_timeout_ms: u64,

    /// Receive buffer size in bytes
    #[arg(short, long, default_value = "1024")]
    buffer_size: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask the peer to flush/persist buffered state (command code 4)
    Flush,

    /// Send an arbitrary command code (0-255)
    Raw {
        /// The command code to send
        code: u8,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,nanoprobe=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let mut builder = Config::builder()
        .host(&args.host)
        .port(args.port)
        .receive_buffer_size(args.buffer_size);

    if args.connect_timeout_ms > 0 {
        builder = builder.connect_timeout(Duration::from_millis(args.connect_timeout_ms));
    }
    if args.read_timeout_ms > 0 {
        builder = builder.read_timeout(Duration::from_millis(args.read_timeout_ms));
    }

    let config = builder.build();

    let command = match args.command {
        Commands::Flush => Command::Flush,
        Commands::Raw { code } => Command::from_code(code),
    };

    tracing::info!(
        "Probing {} with command 0x{:02x}",
        config.addr(),
        command.code()
    );

    let client = ProbeClient::new(config);
    match client.probe(command) {
        Ok(response) => {
            if response.is_empty() {
                println!("response: <empty> (peer closed without writing)");
            } else {
                println!(
                    "response ({} bytes): {}",
                    response.len(),
                    response.as_bytes().escape_ascii()
                );
            }
        }
        Err(e) => {
            tracing::error!("Probe failed: {}", e);
            std::process::exit(1);
        }
    }
}
