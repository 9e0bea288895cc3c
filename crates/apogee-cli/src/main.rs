//! `apogee` — command-line entry points for the launch sync pipeline.
//!
//! # Usage
//!
//! ```
//! apogee sync                      # one scheduled-style run, JSON on stdout
//! apogee sync --manual             # same run, marked as manually triggered
//! apogee launches --status failure # query the store's secondary lookups
//! ```
//!
//! `apogee sync` runs the whole pipeline in-process; wiring it to cron or a
//! systemd timer is the deployment's concern. A fatal fetch or configuration
//! error exits nonzero with the failure message on stderr.

use std::{path::PathBuf, time::Duration};

use anyhow::{Context as _, Result, anyhow};
use apogee_core::store::{LaunchQuery, LaunchStore as _};
use apogee_source::{HttpLaunchSource, SourceConfig};
use apogee_store_sqlite::SqliteStore;
use apogee_sync::{ExecutionType, SyncPipeline, TriggerContext};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "apogee", about = "Launch sync pipeline runner")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, env = "APOGEE_CONFIG", default_value = "config.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Run the sync pipeline once and print the run result as JSON.
  Sync {
    /// Mark the run as manually triggered instead of scheduled.
    #[arg(long)]
    manual: bool,
  },
  /// List stored launches as JSON.
  Launches {
    /// Filter by derived status: success | failure | upcoming | unknown.
    #[arg(long)]
    status: Option<String>,

    #[arg(long)]
    mission_name: Option<String>,

    #[arg(long)]
    rocket_name: Option<String>,

    /// Exact match on the verbatim stored launch date string.
    #[arg(long)]
    launch_date: Option<String>,

    #[arg(long, default_value_t = 50)]
    limit: usize,

    #[arg(long, default_value_t = 0)]
    offset: usize,
  },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the TOML config file shared with the server; only the fields the
/// CLI needs are read here.
#[derive(Debug, Deserialize)]
struct CliConfig {
  store_path: PathBuf,
  source_url: String,
  #[serde(default = "default_http_timeout_secs")]
  http_timeout_secs: u64,
  #[serde(default = "default_latest_limit")]
  latest_limit: usize,
}

fn default_http_timeout_secs() -> u64 { 30 }

fn default_latest_limit() -> usize { 5 }

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("APOGEE"))
    .build()
    .context("failed to read config file")?;
  let cfg: CliConfig = settings
    .try_deserialize()
    .context("failed to deserialise configuration")?;

  match cli.command {
    Command::Sync { manual } => run_sync(&cfg, manual).await,
    Command::Launches {
      status,
      mission_name,
      rocket_name,
      launch_date,
      limit,
      offset,
    } => {
      let query = LaunchQuery {
        mission_name,
        rocket_name,
        launch_date,
        status: status
          .as_deref()
          .map(|s| s.parse().map_err(|e| anyhow!("{e}")))
          .transpose()?,
        limit: Some(limit),
        offset: Some(offset),
      };
      list_launches(&cfg, &query).await
    }
  }
}

// ─── Commands ─────────────────────────────────────────────────────────────────

async fn run_sync(cfg: &CliConfig, manual: bool) -> Result<()> {
  let store = SqliteStore::open(&cfg.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", cfg.store_path))?;
  let source = HttpLaunchSource::new(SourceConfig {
    endpoint: cfg.source_url.clone(),
    timeout:  Duration::from_secs(cfg.http_timeout_secs),
  })
  .context("failed to build launch source")?;

  let execution_type = if manual {
    ExecutionType::Manual
  } else {
    ExecutionType::Scheduled
  };

  let pipeline =
    SyncPipeline::new(store, source).with_latest_limit(cfg.latest_limit);
  let result = pipeline
    .run(TriggerContext::new(execution_type))
    .await
    .context("sync run failed")?;

  println!("{}", serde_json::to_string_pretty(&result)?);
  Ok(())
}

async fn list_launches(cfg: &CliConfig, query: &LaunchQuery) -> Result<()> {
  let store = SqliteStore::open(&cfg.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", cfg.store_path))?;

  let launches = store.list(query).await.context("listing launches")?;
  println!("{}", serde_json::to_string_pretty(&launches)?);
  Ok(())
}
