//! Emote Relay Service
//!
//! A minimal HTTP relay built with Tokio and Axum: it validates a fixed
//! set of query parameters, forwards them as a single GET to the game
//! server named by the caller, and wraps the outcome (or any failure) in
//! a uniform JSON envelope with permissive cross-origin headers.
//!
//! ```text
//!     Client Request ──▶ http server ──▶ relay params ──▶ forwarding URL
//!                                                               │
//!     Client Response ◀── JSON envelope ◀── upstream client ◀───┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use emote_relay::config::{load_config, RelayConfig};
use emote_relay::http::HttpServer;
use emote_relay::lifecycle::Shutdown;
use emote_relay::observability::logging;

#[derive(Parser)]
#[command(name = "emote-relay")]
#[command(about = "HTTP relay that forwards emote requests to a game server", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!("emote-relay v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        user_agent = %config.upstream.user_agent,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
