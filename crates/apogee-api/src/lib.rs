//! HTTP surface for the Apogee launch sync.
//!
//! Exposes an axum [`Router`] backed by any [`LaunchStore`] +
//! [`LaunchSource`] pair: a trigger endpoint for scheduler or manual
//! invocation, and read endpoints over the store's secondary lookups.
//! Transport concerns (TLS, caller auth) are the deployment's responsibility.

pub mod error;
pub mod launches;
pub mod runs;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use apogee_core::{source::LaunchSource, store::LaunchStore};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` with an
/// `APOGEE_*` environment overlay. Constructed once at startup and passed by
/// reference — component logic never reads the environment itself.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// Full URL of the external launches collection.
  pub source_url: String,
  #[serde(default = "default_http_timeout_secs")]
  pub http_timeout_secs: u64,
  /// Bound on the run summary's latest-launches list.
  #[serde(default = "default_latest_limit")]
  pub latest_limit: usize,
}

fn default_http_timeout_secs() -> u64 { 30 }

fn default_latest_limit() -> usize { 5 }

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: LaunchStore, F: LaunchSource> {
  pub store:  Arc<S>,
  pub source: Arc<F>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the sync service.
pub fn router<S, F>(state: AppState<S, F>) -> Router
where
  S: LaunchStore + Clone + Send + Sync + 'static,
  F: LaunchSource + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/health",                get(health))
    .route("/sync/runs",             post(runs::trigger::<S, F>))
    .route("/launches",              get(launches::list::<S, F>))
    .route("/launches/{launch_id}",  get(launches::get_one::<S, F>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

async fn health() -> &'static str { "ok" }

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  use apogee_core::source::LaunchSource;
  use apogee_store_sqlite::SqliteStore;

  use super::*;

  /// Test double for the launch feed: a canned payload or a fetch failure.
  #[derive(Clone)]
  struct StubSource {
    payload: Result<Vec<Value>, String>,
  }

  impl LaunchSource for StubSource {
    type Error = apogee_source::Error;

    async fn fetch_launches(&self) -> Result<Vec<Value>, Self::Error> {
      match &self.payload {
        Ok(records) => Ok(records.clone()),
        Err(_) => Err(apogee_source::Error::Status(500)),
      }
    }
  }

  async fn make_state(
    payload: Result<Vec<Value>, String>,
  ) -> AppState<SqliteStore, StubSource> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    AppState {
      store:  Arc::new(store),
      source: Arc::new(StubSource { payload }),
      config: Arc::new(ServerConfig {
        host:              "127.0.0.1".to_string(),
        port:              8080,
        store_path:        PathBuf::from(":memory:"),
        source_url:        "http://stub.invalid/launches".to_string(),
        http_timeout_secs: 5,
        latest_limit:      5,
      }),
    }
  }

  fn sample_payload() -> Vec<Value> {
    vec![
      json!({
        "flight_number": 1,
        "mission_name": "FalconSat",
        "rocket": { "rocket_name": "Falcon 1" },
        "launch_success": false,
        "launch_date_utc": "2006-03-24T22:30:00.000Z"
      }),
      json!({
        "flight_number": 2,
        "mission_name": "DemoSat",
        "rocket": { "rocket_name": "Falcon 1" },
        "launch_success": false,
        "launch_date_utc": "2007-03-21T01:10:00.000Z"
      }),
    ]
  }

  async fn send(
    state:  AppState<SqliteStore, StubSource>,
    method: &str,
    uri:    &str,
    body:   Option<Value>,
  ) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
      Some(json) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        builder.body(Body::from(json.to_string())).unwrap()
      }
      None => builder.body(Body::empty()).unwrap(),
    };

    let response = router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
    let json = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
  }

  // ── Health ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn health_returns_200() {
    let state = make_state(Ok(vec![])).await;
    let (status, _) = send(state, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
  }

  // ── Trigger ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn trigger_without_body_defaults_to_manual() {
    let state = make_state(Ok(sample_payload())).await;
    let (status, body) = send(state, "POST", "/sync/runs", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["execution_type"], "manual");
    assert_eq!(body["summary"]["new_records"], 2);
    assert_eq!(body["summary"]["updated_records"], 0);
    assert_eq!(body["summary"]["errors"], 0);
    assert_eq!(body["summary"]["total_processed"], 2);
    assert!(body["message"].as_str().unwrap().contains("2 new"));
    assert!(body["timestamp"].is_string());

    let latest = body["details"]["latest_launches"].as_array().unwrap();
    assert_eq!(latest.len(), 2);
    assert_eq!(latest[0]["flight_number"], 1);
    assert_eq!(latest[0]["mission_name"], "FalconSat");
  }

  #[tokio::test]
  async fn trigger_with_scheduled_body_echoes_execution_type() {
    let state = make_state(Ok(sample_payload())).await;
    let (status, body) = send(
      state,
      "POST",
      "/sync/runs",
      Some(json!({ "execution_type": "scheduled" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["execution_type"], "scheduled");
  }

  #[tokio::test]
  async fn second_trigger_reports_updates_and_launches_are_queryable() {
    let state = make_state(Ok(sample_payload())).await;

    let (_, first) = send(state.clone(), "POST", "/sync/runs", None).await;
    assert_eq!(first["summary"]["new_records"], 2);

    let (_, second) = send(state.clone(), "POST", "/sync/runs", None).await;
    assert_eq!(second["summary"]["new_records"], 0);
    assert_eq!(second["summary"]["updated_records"], 2);

    let (status, launches) =
      send(state.clone(), "GET", "/launches?status=failure", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(launches.as_array().unwrap().len(), 2);

    let (status, launch) = send(state, "GET", "/launches/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(launch["mission_name"], "FalconSat");
    assert_eq!(launch["status"], "failure");
  }

  #[tokio::test]
  async fn fetch_failure_returns_502_without_summary() {
    let state = make_state(Err("boom".to_string())).await;
    let (status, body) =
      send(state.clone(), "POST", "/sync/runs", None).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["message"].as_str().unwrap().contains("fetch failed"));
    assert!(body.get("summary").is_none());
    assert!(body.get("details").is_none());

    // Nothing was written.
    let (_, launches) = send(state, "GET", "/launches", None).await;
    assert!(launches.as_array().unwrap().is_empty());
  }

  // ── Reads ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_unknown_launch_returns_404() {
    let state = make_state(Ok(vec![])).await;
    let (status, body) = send(state, "GET", "/launches/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("42"));
  }

  #[tokio::test]
  async fn list_filters_by_mission_name() {
    let state = make_state(Ok(sample_payload())).await;
    send(state.clone(), "POST", "/sync/runs", None).await;

    let (status, launches) = send(
      state,
      "GET",
      "/launches?mission_name=DemoSat",
      None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let launches = launches.as_array().unwrap().clone();
    assert_eq!(launches.len(), 1);
    assert_eq!(launches[0]["flight_number"], 2);
  }
}
