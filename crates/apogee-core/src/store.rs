//! The `LaunchStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `apogee-store-sqlite`).
//! The pipeline and the API depend on this abstraction, not on any concrete
//! backend.
//!
//! All methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use serde::Serialize;

use crate::launch::{Launch, Status};

// ─── Upsert outcome ──────────────────────────────────────────────────────────

/// What an upsert did to the row for a given `launch_id`.
///
/// Decided by prior existence alone — field values are never diffed, so a
/// byte-identical re-sync still reports `Updated`. A store-level failure is
/// the `Err` arm of the upsert result and stays local to that record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertOutcome {
  Created,
  Updated,
}

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`LaunchStore::list`]. All filters are conjunctive.
///
/// These are the secondary, non-unique lookups kept for external querying;
/// the upsert path never consults them.
#[derive(Debug, Clone, Default)]
pub struct LaunchQuery {
  pub mission_name: Option<String>,
  pub rocket_name:  Option<String>,
  /// Exact match on the verbatim stored date string.
  pub launch_date:  Option<String>,
  pub status:       Option<Status>,
  pub limit:        Option<usize>,
  pub offset:       Option<usize>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the persistent launch store.
pub trait LaunchStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert or fully replace the row keyed by `launch.launch_id`.
  ///
  /// A replace overwrites every column with the freshly normalized values;
  /// nothing is merged. Each call is a single atomic write, so concurrent
  /// runs racing on the same key degrade to last-writer-wins.
  fn upsert<'a>(
    &'a self,
    launch: &'a Launch,
  ) -> impl Future<Output = Result<UpsertOutcome, Self::Error>> + Send + 'a;

  /// Retrieve a launch by primary key. Returns `None` if not found.
  fn get<'a>(
    &'a self,
    launch_id: &'a str,
  ) -> impl Future<Output = Result<Option<Launch>, Self::Error>> + Send + 'a;

  /// Whether a row with this `launch_id` exists.
  fn exists<'a>(
    &'a self,
    launch_id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// List launches matching `query`, in flight-number order.
  fn list<'a>(
    &'a self,
    query: &'a LaunchQuery,
  ) -> impl Future<Output = Result<Vec<Launch>, Self::Error>> + Send + 'a;

  /// Total number of stored launches.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
