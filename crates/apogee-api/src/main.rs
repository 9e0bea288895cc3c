//! apogee-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite launch store, builds the HTTP launch source, and serves the sync
//! API. Scheduling is external: point a cron/systemd timer (or any other
//! scheduler) at `POST /sync/runs`.

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context as _;
use apogee_api::{AppState, ServerConfig};
use apogee_source::{HttpLaunchSource, SourceConfig};
use apogee_store_sqlite::SqliteStore;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Apogee launch sync server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
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

  // Load configuration. Failure here is a startup error — no network call
  // has been attempted yet.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("APOGEE"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Open the SQLite store.
  let store = SqliteStore::open(&server_cfg.store_path)
    .await
    .with_context(|| {
      format!("failed to open store at {:?}", server_cfg.store_path)
    })?;

  // Build the launch source.
  let source = HttpLaunchSource::new(SourceConfig {
    endpoint: server_cfg.source_url.clone(),
    timeout:  Duration::from_secs(server_cfg.http_timeout_secs),
  })
  .context("failed to build launch source")?;

  // Build application state.
  let state = AppState {
    store:  Arc::new(store),
    source: Arc::new(source),
    config: Arc::new(server_cfg.clone()),
  };

  let app = apogee_api::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
