//! Server binary: parses flags, sets up logging, and serves the API.

use std::net::SocketAddr;

use anyhow::Context as _;
use clap::Parser;

/// Sudoku solve/check HTTP service.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Socket address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("failed to bind {}", args.listen))?;
    log::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, gridlock_server::router())
        .await
        .context("server error")?;
    Ok(())
}
