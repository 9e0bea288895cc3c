//! Handlers for `/launches` endpoints — the external query surface backed by
//! the store's secondary lookups.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/launches` | Filters: `mission_name`, `rocket_name`, `launch_date`, `status`, plus `limit`/`offset` |
//! | `GET`  | `/launches/:launch_id` | 404 if not found |

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde::Deserialize;

use apogee_core::{
  launch::{Launch, Status},
  source::LaunchSource,
  store::{LaunchQuery, LaunchStore},
};

use crate::{AppState, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  pub mission_name: Option<String>,
  pub rocket_name:  Option<String>,
  pub launch_date:  Option<String>,
  pub status:       Option<Status>,
  pub limit:        Option<usize>,
  pub offset:       Option<usize>,
}

/// `GET /launches[?<filters>]`
pub async fn list<S, F>(
  State(state): State<AppState<S, F>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Launch>>, ApiError>
where
  S: LaunchStore + Clone + Send + Sync + 'static,
  F: LaunchSource + Clone + Send + Sync + 'static,
{
  let query = LaunchQuery {
    mission_name: params.mission_name,
    rocket_name:  params.rocket_name,
    launch_date:  params.launch_date,
    status:       params.status,
    limit:        params.limit,
    offset:       params.offset,
  };

  let launches = state
    .store
    .list(&query)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(launches))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /launches/:launch_id`
pub async fn get_one<S, F>(
  State(state): State<AppState<S, F>>,
  Path(launch_id): Path<String>,
) -> Result<Json<Launch>, ApiError>
where
  S: LaunchStore + Clone + Send + Sync + 'static,
  F: LaunchSource + Clone + Send + Sync + 'static,
{
  let launch = state
    .store
    .get(&launch_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("launch {launch_id} not found")))?;
  Ok(Json(launch))
}
