//! Integration tests for `SqliteStore` against an in-memory database.

use apogee_core::{
  launch::{Launch, Status},
  store::{LaunchQuery, LaunchStore, UpsertOutcome},
};
use chrono::{TimeZone, Utc};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn sample_launch(flight_number: i64) -> Launch {
  Launch {
    launch_id:      flight_number.to_string(),
    flight_number,
    mission_name:   format!("Mission {flight_number}"),
    rocket_name:    "Falcon 9".to_string(),
    launch_date:    "2020-01-01T00:00:00Z".to_string(),
    launch_success: Some(true),
    launch_site:    Some("CCAFS SLC 40".to_string()),
    details:        Some("nominal".to_string()),
    status:         Status::Success,
    last_updated:   Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).single().unwrap(),
  }
}

// ─── Upsert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn upsert_reports_created_then_updated() {
  let s = store().await;
  let launch = sample_launch(1);

  assert_eq!(s.upsert(&launch).await.unwrap(), UpsertOutcome::Created);
  // Identical content still reports Updated — existence, not diffing.
  assert_eq!(s.upsert(&launch).await.unwrap(), UpsertOutcome::Updated);

  let stored = s.get("1").await.unwrap().unwrap();
  assert_eq!(stored, launch);
}

#[tokio::test]
async fn upsert_fully_replaces_the_row() {
  let s = store().await;

  let mut launch = sample_launch(4);
  s.upsert(&launch).await.unwrap();

  launch.mission_name = "Renamed".to_string();
  launch.launch_success = None;
  launch.launch_site = None;
  launch.details = None;
  launch.status = Status::Unknown;
  assert_eq!(s.upsert(&launch).await.unwrap(), UpsertOutcome::Updated);

  // Nothing of the old row survives — nulls overwrite previous values.
  let stored = s.get("4").await.unwrap().unwrap();
  assert_eq!(stored.mission_name, "Renamed");
  assert_eq!(stored.launch_success, None);
  assert_eq!(stored.launch_site, None);
  assert_eq!(stored.details, None);
  assert_eq!(stored.status, Status::Unknown);
}

#[tokio::test]
async fn unparseable_launch_date_is_stored_verbatim() {
  let s = store().await;

  let mut launch = sample_launch(9);
  launch.launch_date = "Q3 2025".to_string();
  launch.launch_success = None;
  launch.status = Status::Unknown;
  s.upsert(&launch).await.unwrap();

  let stored = s.get("9").await.unwrap().unwrap();
  assert_eq!(stored.launch_date, "Q3 2025");
  assert_eq!(stored.parsed_date(), None);
}

// ─── Reads ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get("999").await.unwrap().is_none());
}

#[tokio::test]
async fn exists_reflects_upserts() {
  let s = store().await;
  assert!(!s.exists("2").await.unwrap());

  s.upsert(&sample_launch(2)).await.unwrap();
  assert!(s.exists("2").await.unwrap());
}

#[tokio::test]
async fn count_tracks_distinct_launch_ids() {
  let s = store().await;
  s.upsert(&sample_launch(1)).await.unwrap();
  s.upsert(&sample_launch(2)).await.unwrap();
  s.upsert(&sample_launch(2)).await.unwrap();

  assert_eq!(s.count().await.unwrap(), 2);
}

// ─── Secondary lookups ───────────────────────────────────────────────────────

#[tokio::test]
async fn list_all_in_flight_number_order() {
  let s = store().await;
  s.upsert(&sample_launch(3)).await.unwrap();
  s.upsert(&sample_launch(1)).await.unwrap();
  s.upsert(&sample_launch(2)).await.unwrap();

  let all = s.list(&LaunchQuery::default()).await.unwrap();
  let numbers: Vec<_> = all.iter().map(|l| l.flight_number).collect();
  assert_eq!(numbers, vec![1, 2, 3]);
}

#[tokio::test]
async fn list_filters_by_status() {
  let s = store().await;

  let mut failed = sample_launch(1);
  failed.launch_success = Some(false);
  failed.status = Status::Failure;
  s.upsert(&failed).await.unwrap();
  s.upsert(&sample_launch(2)).await.unwrap();
  s.upsert(&sample_launch(3)).await.unwrap();

  let failures = s
    .list(&LaunchQuery {
      status: Some(Status::Failure),
      ..Default::default()
    })
    .await
    .unwrap();

  assert_eq!(failures.len(), 1);
  assert_eq!(failures[0].flight_number, 1);
}

#[tokio::test]
async fn list_filters_by_mission_and_rocket() {
  let s = store().await;

  let mut heavy = sample_launch(55);
  heavy.rocket_name = "Falcon Heavy".to_string();
  s.upsert(&heavy).await.unwrap();
  s.upsert(&sample_launch(56)).await.unwrap();

  let by_rocket = s
    .list(&LaunchQuery {
      rocket_name: Some("Falcon Heavy".to_string()),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(by_rocket.len(), 1);
  assert_eq!(by_rocket[0].flight_number, 55);

  let by_mission = s
    .list(&LaunchQuery {
      mission_name: Some("Mission 56".to_string()),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(by_mission.len(), 1);
  assert_eq!(by_mission[0].flight_number, 56);

  // Conjunctive filters: a mismatched pair returns nothing.
  let none = s
    .list(&LaunchQuery {
      mission_name: Some("Mission 56".to_string()),
      rocket_name: Some("Falcon Heavy".to_string()),
      ..Default::default()
    })
    .await
    .unwrap();
  assert!(none.is_empty());
}

#[tokio::test]
async fn list_respects_limit_and_offset() {
  let s = store().await;
  for n in 1..=5 {
    s.upsert(&sample_launch(n)).await.unwrap();
  }

  let page = s
    .list(&LaunchQuery {
      limit: Some(2),
      offset: Some(2),
      ..Default::default()
    })
    .await
    .unwrap();

  let numbers: Vec<_> = page.iter().map(|l| l.flight_number).collect();
  assert_eq!(numbers, vec![3, 4]);
}
