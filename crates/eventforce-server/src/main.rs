//! eventforce server binary.
//!
//! Reads `eventforce.toml` (or the path specified with `--config`), builds
//! the starting ledger, and serves the JSON API over HTTP.
//!
//! # Inspecting the seed data
//!
//! ```text
//! cargo run -p eventforce-server -- --print-snapshot
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use eventforce_api::AppState;
use eventforce_server::{ServerConfig, initial_ledger, seed};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "EventForce staffing ledger server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "eventforce.toml")]
  config: PathBuf,

  /// Print the starting ledger as a JSON snapshot and exit.
  #[arg(long)]
  print_snapshot: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;

  let ledger = initial_ledger(&server_cfg)?;

  if cli.print_snapshot {
    println!("{}", ledger.snapshot().to_json()?);
    return Ok(());
  }

  let state = AppState::new(Arc::new(ledger), seed::demo_session()?);
  let app = eventforce_server::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
