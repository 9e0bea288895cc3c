//! Run-level types: trigger context, counters, and the run result.

use apogee_core::launch::LaunchRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// ─── Trigger ─────────────────────────────────────────────────────────────────

/// How a run was invoked. Response metadata only — it never alters pipeline
/// behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionType {
  Scheduled,
  #[default]
  Manual,
}

/// Invocation metadata passed into [`crate::SyncPipeline::run`].
///
/// `requested_at` doubles as the run clock: one run classifies and stamps
/// every record against this single instant.
#[derive(Debug, Clone, Copy)]
pub struct TriggerContext {
  pub execution_type: ExecutionType,
  pub requested_at:   DateTime<Utc>,
}

impl TriggerContext {
  /// A trigger stamped with the current wall clock.
  pub fn new(execution_type: ExecutionType) -> Self {
    Self {
      execution_type,
      requested_at: Utc::now(),
    }
  }
}

// ─── Summary ─────────────────────────────────────────────────────────────────

/// Per-run counters.
///
/// `total_processed` always equals
/// `new_records + updated_records + errors` for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
  pub new_records:     u64,
  pub updated_records: u64,
  pub errors:          u64,
  pub total_processed: u64,
}

/// The outcome of one completed (possibly partially-erroring) run.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
  pub run_id:          Uuid,
  pub message:         String,
  pub execution_type:  ExecutionType,
  /// When the run was requested — trigger metadata, not completion time.
  pub timestamp:       DateTime<Utc>,
  pub summary:         RunSummary,
  /// Identifying fields of the most recently upserted launches, bounded by
  /// the pipeline's latest-limit.
  pub latest_launches: Vec<LaunchRef>,
}

// ─── Fatal errors ────────────────────────────────────────────────────────────

/// A fatal, run-level failure.
///
/// Per-record parse and store errors never surface here; they are absorbed
/// into [`RunSummary::errors`].
#[derive(Debug, Error)]
pub enum Error {
  /// The single fetch attempt failed. No record was processed and nothing
  /// was written.
  #[error("fetch failed: {0}")]
  Fetch(#[source] Box<dyn std::error::Error + Send + Sync>),
}
