//! The `LaunchSource` trait — the replaceable fetch seam.

use std::future::Future;

use serde_json::Value;

/// Abstraction over the external read-only launch feed.
///
/// One call performs exactly one outbound read; retry/backoff policy, if ever
/// wanted, layers on top of this trait without touching pipeline sequencing.
/// Implementations validate only the top-level payload shape (a JSON
/// sequence); per-record strictness belongs to the normalizer.
pub trait LaunchSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch every raw launch record the source currently exposes.
  ///
  /// Any error here is fatal to the run that issued the fetch.
  fn fetch_launches(
    &self,
  ) -> impl Future<Output = Result<Vec<Value>, Self::Error>> + Send + '_;
}
