//! Feedback HTTP Server Binary
//!
//! Main entry point for the feedback REST API server. It loads configuration,
//! builds the in-memory store, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin feedback-server
//! cargo run --bin feedback-server -- --host 127.0.0.1 --port 9000 --no-seed
//! cargo run --bin feedback-server -- --config backend/feedback.toml
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8000)
//! - `FEEDBACK_CONFIG`: Path to a TOML configuration file
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use feedback_api::config::AppConfig;
use feedback_api::db;
use feedback_api::http::{create_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "feedback-server")]
#[command(about = "Feedback Management API server")]
struct Args {
    /// Interface to bind
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// TOML configuration file (defaults to ./feedback.toml when present)
    #[arg(short, long, env = "FEEDBACK_CONFIG")]
    config: Option<PathBuf>,

    /// Start with an empty store instead of the example records
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_default_location()?,
    }
    .server;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.no_seed {
        config.seed = false;
    }

    info!("Starting Feedback Management API");

    let repository = db::create_repository(config.seed).await?;
    info!(
        seeded = config.seed,
        "Repository initialized successfully"
    );

    let state = AppState::new(repository).with_body_limit(config.body_limit_bytes);
    let app = create_router(state);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
