//! HTTP server wiring for EventForce.
//!
//! Loads [`ServerConfig`], builds the starting ledger and mounts the JSON
//! API under `/api`.

pub mod seed;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use axum::{Router, routing::get};
use eventforce_api::{AppState, api_router};
use eventforce_core::store::LedgerStore;
use eventforce_store_memory::{LedgerSnapshot, MemoryLedger};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `eventforce.toml` and
/// `EVENTFORCE_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  /// Populate the ledger with the demo catalogue at startup.
  pub seed_demo:     bool,
  /// Start from this JSON snapshot instead; takes precedence over
  /// `seed_demo`.
  pub snapshot_path: Option<PathBuf>,
}

impl ServerConfig {
  /// Read `path` if it exists, then apply environment overrides on top of
  /// the built-in defaults.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8080)?
      .set_default("seed_demo", true)?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("EVENTFORCE"))
      .build()?
      .try_deserialize()
  }
}

/// The ledger the server starts with.
pub fn initial_ledger(config: &ServerConfig) -> anyhow::Result<MemoryLedger> {
  if let Some(path) = &config.snapshot_path {
    let json = std::fs::read_to_string(path)
      .with_context(|| format!("failed to read snapshot {path:?}"))?;
    let snapshot = LedgerSnapshot::from_json(&json)
      .with_context(|| format!("failed to parse snapshot {path:?}"))?;
    let ledger = MemoryLedger::from_snapshot(snapshot)
      .with_context(|| format!("snapshot {path:?} is not a valid ledger"))?;
    tracing::info!(?path, "loaded ledger snapshot");
    return Ok(ledger);
  }

  if config.seed_demo {
    let ledger = seed::demo_ledger().context("failed to seed demo ledger")?;
    tracing::info!("seeded demo ledger");
    return Ok(ledger);
  }

  Ok(MemoryLedger::new())
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the complete server router: health probe plus the API under `/api`.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: LedgerStore + 'static,
{
  Router::new()
    .route("/healthz", get(healthz))
    .nest("/api", api_router(state))
    .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str { "ok" }
