//! [`SyncPipeline`] — sequences fetch, normalization, classification, and
//! upserts for one run, and builds the run summary.

use std::collections::VecDeque;

use apogee_core::{
  launch::LaunchRef,
  normalize::normalize,
  source::LaunchSource,
  store::{LaunchStore, UpsertOutcome},
};
use uuid::Uuid;

use crate::run::{Error, RunResult, RunSummary, TriggerContext};

/// The pipeline orchestrator, generic over its two collaborators.
///
/// Holds no run state: every invocation is independent, and the only shared
/// state between invocations is the store itself.
pub struct SyncPipeline<S, F> {
  store:        S,
  source:       F,
  latest_limit: usize,
}

impl<S, F> SyncPipeline<S, F>
where
  S: LaunchStore,
  F: LaunchSource,
{
  /// How many recently-upserted launches a run summary carries by default.
  pub const DEFAULT_LATEST_LIMIT: usize = 5;

  pub fn new(store: S, source: F) -> Self {
    Self {
      store,
      source,
      latest_limit: Self::DEFAULT_LATEST_LIMIT,
    }
  }

  /// Override the bound on the summary's latest-launches list.
  pub fn with_latest_limit(mut self, limit: usize) -> Self {
    self.latest_limit = limit;
    self
  }

  /// Execute one full run.
  ///
  /// Fetches once, then processes records strictly in fetch order. A fetch
  /// failure is fatal and returns before anything is written; a parse or
  /// store failure is counted against that record alone and the loop moves
  /// on. The returned counters always reconcile:
  /// `new + updated + errors == total_processed`.
  pub async fn run(&self, trigger: TriggerContext) -> Result<RunResult, Error> {
    let run_id = Uuid::new_v4();
    tracing::info!(
      %run_id,
      execution_type = ?trigger.execution_type,
      "starting sync run"
    );

    let records = self
      .source
      .fetch_launches()
      .await
      .map_err(|e| Error::Fetch(Box::new(e)))?;
    tracing::info!(%run_id, records = records.len(), "fetched launch records");

    let mut summary = RunSummary::default();
    let mut latest: VecDeque<LaunchRef> = VecDeque::new();

    for record in records {
      summary.total_processed += 1;

      let launch = match normalize(record, trigger.requested_at) {
        Ok(launch) => launch,
        Err(e) => {
          summary.errors += 1;
          tracing::warn!(%run_id, error = %e, "skipping malformed record");
          continue;
        }
      };

      match self.store.upsert(&launch).await {
        Ok(UpsertOutcome::Created) => summary.new_records += 1,
        Ok(UpsertOutcome::Updated) => summary.updated_records += 1,
        Err(e) => {
          summary.errors += 1;
          tracing::warn!(
            %run_id,
            launch_id = %launch.launch_id,
            error = %e,
            "upsert failed"
          );
          continue;
        }
      }

      latest.push_back(launch.reference());
      if latest.len() > self.latest_limit {
        latest.pop_front();
      }
    }

    tracing::info!(
      %run_id,
      new = summary.new_records,
      updated = summary.updated_records,
      errors = summary.errors,
      "sync run complete"
    );

    Ok(RunResult {
      run_id,
      message: run_message(&summary),
      execution_type: trigger.execution_type,
      timestamp: trigger.requested_at,
      summary,
      latest_launches: latest.into_iter().collect(),
    })
  }
}

fn run_message(summary: &RunSummary) -> String {
  format!(
    "sync completed: {} new, {} updated, {} errors",
    summary.new_records, summary.updated_records, summary.errors
  )
}

// ─── Tests ───────────────────────────────────────────────────────────────────
