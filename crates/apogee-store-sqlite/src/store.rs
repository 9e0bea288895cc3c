//! [`SqliteStore`] — the SQLite implementation of [`LaunchStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use apogee_core::{
  launch::Launch,
  store::{LaunchQuery, LaunchStore, UpsertOutcome},
};

use crate::{
  Error, Result,
  encode::{LAUNCH_COLUMNS, RawLaunchRow, encode_dt, encode_status, encode_success},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A launch store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── LaunchStore impl ────────────────────────────────────────────────────────

impl LaunchStore for SqliteStore {
  type Error = Error;

  async fn upsert(&self, launch: &Launch) -> Result<UpsertOutcome> {
    // Existence decides the reported outcome; the write itself is always a
    // full-row replace regardless of whether any value differs.
    let existed = self.exists(&launch.launch_id).await?;

    let launch_id      = launch.launch_id.clone();
    let flight_number  = launch.flight_number;
    let mission_name   = launch.mission_name.clone();
    let rocket_name    = launch.rocket_name.clone();
    let launch_date    = launch.launch_date.clone();
    let launch_success = encode_success(launch.launch_success);
    let launch_site    = launch.launch_site.clone();
    let details        = launch.details.clone();
    let status         = encode_status(launch.status).to_owned();
    let last_updated   = encode_dt(launch.last_updated);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR REPLACE INTO launches (
             launch_id, flight_number, mission_name, rocket_name,
             launch_date, launch_success, launch_site, details,
             status, last_updated
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
          rusqlite::params![
            launch_id,
            flight_number,
            mission_name,
            rocket_name,
            launch_date,
            launch_success,
            launch_site,
            details,
            status,
            last_updated,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(if existed { UpsertOutcome::Updated } else { UpsertOutcome::Created })
  }

  async fn get(&self, launch_id: &str) -> Result<Option<Launch>> {
    let id = launch_id.to_owned();

    let raw: Option<RawLaunchRow> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {LAUNCH_COLUMNS} FROM launches WHERE launch_id = ?1"),
              rusqlite::params![id],
              RawLaunchRow::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawLaunchRow::into_launch).transpose()
  }

  async fn exists(&self, launch_id: &str) -> Result<bool> {
    let id = launch_id.to_owned();

    let exists = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT 1 FROM launches WHERE launch_id = ?1",
              rusqlite::params![id],
              |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false),
        )
      })
      .await?;

    Ok(exists)
  }

  async fn list(&self, query: &LaunchQuery) -> Result<Vec<Launch>> {
    let mission_name = query.mission_name.clone();
    let rocket_name  = query.rocket_name.clone();
    let launch_date  = query.launch_date.clone();
    let status       = query.status.map(encode_status).map(str::to_owned);
    let limit_val    = query.limit.unwrap_or(100) as i64;
    let offset_val   = query.offset.unwrap_or(0) as i64;

    let raws: Vec<RawLaunchRow> = self
      .conn
      .call(move |conn| {
        // Build the WHERE clause dynamically. Placeholder indexes are fixed;
        // LIMIT/OFFSET always occupy the highest slots so unused filter
        // parameters can still be bound.
        let mut conds: Vec<&'static str> = vec![];
        if mission_name.is_some() {
          conds.push("mission_name = ?1");
        }
        if rocket_name.is_some() {
          conds.push("rocket_name = ?2");
        }
        if launch_date.is_some() {
          conds.push("launch_date = ?3");
        }
        if status.is_some() {
          conds.push("status = ?4");
        }

        let where_clause = if conds.is_empty() {
          String::new()
        } else {
          format!("WHERE {}", conds.join(" AND "))
        };

        let sql = format!(
          "SELECT {LAUNCH_COLUMNS} FROM launches
           {where_clause}
           ORDER BY flight_number
           LIMIT ?5 OFFSET ?6"
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![
              mission_name.as_deref(),
              rocket_name.as_deref(),
              launch_date.as_deref(),
              status.as_deref(),
              limit_val,
              offset_val,
            ],
            RawLaunchRow::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawLaunchRow::into_launch).collect()
  }

  async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM launches", [], |r| r.get(0))?)
      })
      .await?;
    Ok(n as u64)
  }
}
