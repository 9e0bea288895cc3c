//! Handler for the sync trigger endpoint.
//!
//! `POST /sync/runs` accepts either a scheduler-originated request with no
//! payload or a manual request with an optional JSON body; the body only
//! marks the execution type and never alters pipeline behavior.

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use apogee_core::{source::LaunchSource, store::LaunchStore};
use apogee_sync::{ExecutionType, SyncPipeline, TriggerContext};

use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct TriggerBody {
  #[serde(default)]
  pub execution_type: ExecutionType,
}

/// `POST /sync/runs` — run the pipeline once and report the summary.
pub async fn trigger<S, F>(
  State(state): State<AppState<S, F>>,
  body: Option<Json<TriggerBody>>,
) -> Response
where
  S: LaunchStore + Clone + Send + Sync + 'static,
  F: LaunchSource + Clone + Send + Sync + 'static,
{
  let execution_type = body
    .map(|Json(b)| b.execution_type)
    .unwrap_or(ExecutionType::Manual);

  let pipeline = SyncPipeline::new(
    state.store.as_ref().clone(),
    state.source.as_ref().clone(),
  )
  .with_latest_limit(state.config.latest_limit);

  match pipeline.run(TriggerContext::new(execution_type)).await {
    Ok(result) => Json(json!({
      "message": result.message,
      "execution_type": result.execution_type,
      "timestamp": result.timestamp,
      "summary": result.summary,
      "details": { "latest_launches": result.latest_launches },
    }))
    .into_response(),
    // Fatal: the fetch never yielded records. No summary, no details.
    Err(e) => (
      StatusCode::BAD_GATEWAY,
      Json(json!({ "message": e.to_string() })),
    )
      .into_response(),
  }
}
