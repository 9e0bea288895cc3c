//! HTTP client for the external launch feed.
//!
//! One [`LaunchSource::fetch_launches`] call performs exactly one GET against
//! the configured endpoint — no retries, no discovery, no side effects beyond
//! the outbound read. Endpoint and timeout arrive as configuration.

pub mod error;

pub use error::{Error, Result};

use std::time::Duration;

use apogee_core::source::LaunchSource;
use reqwest::Client;
use serde_json::Value;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Connection settings for the launch feed.
#[derive(Debug, Clone)]
pub struct SourceConfig {
  /// Full URL of the launches collection, e.g.
  /// `https://api.spacexdata.com/v3/launches`.
  pub endpoint: String,
  pub timeout:  Duration,
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// [`LaunchSource`] backed by a [`reqwest::Client`].
///
/// Cheap to clone — the inner client is `Arc`-based.
#[derive(Clone)]
pub struct HttpLaunchSource {
  client: Client,
  config: SourceConfig,
}

impl HttpLaunchSource {
  pub fn new(config: SourceConfig) -> Result<Self> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { client, config })
  }
}

impl LaunchSource for HttpLaunchSource {
  type Error = Error;

  async fn fetch_launches(&self) -> Result<Vec<Value>> {
    tracing::debug!(endpoint = %self.config.endpoint, "fetching launches");

    let resp = self.client.get(&self.config.endpoint).send().await?;
    let status = resp.status();
    if !status.is_success() {
      return Err(Error::Status(status.as_u16()));
    }

    let body: Value = resp.json().await?;
    decode_payload(body)
  }
}

// ─── Payload decoding ────────────────────────────────────────────────────────

/// Validate the top-level payload shape: it must be a JSON array.
///
/// Elements pass through untouched. A malformed element is a per-record
/// concern for the normalizer, never a fetch failure.
pub fn decode_payload(body: Value) -> Result<Vec<Value>> {
  match body {
    Value::Array(records) => Ok(records),
    other => Err(Error::Payload(format!(
      "expected a JSON array, got {}",
      json_type_name(&other)
    ))),
  }
}

fn json_type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn array_payload_passes_through() {
    let records = decode_payload(json!([
      { "flight_number": 1 },
      { "flight_number": 2 },
    ]))
    .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["flight_number"], 1);
  }

  #[test]
  fn empty_array_is_valid() {
    assert!(decode_payload(json!([])).unwrap().is_empty());
  }

  #[test]
  fn non_array_top_level_is_a_payload_error() {
    for body in [json!({ "error": "rate limited" }), json!("oops"), json!(null)] {
      let err = decode_payload(body).unwrap_err();
      assert!(matches!(err, Error::Payload(_)), "got {err:?}");
    }
  }

  #[test]
  fn malformed_elements_are_not_a_fetch_concern() {
    // A junk element survives decoding; the normalizer rejects it later.
    let records =
      decode_payload(json!([{ "flight_number": 1 }, "junk"])).unwrap();
    assert_eq!(records.len(), 2);
  }
}
