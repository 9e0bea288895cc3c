//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, the status as its lowercase
//! discriminant, and the nullable success flag as `0 | 1 | NULL`.

use apogee_core::launch::{Launch, Status};
use chrono::{DateTime, Utc};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Status ──────────────────────────────────────────────────────────────────

pub fn encode_status(s: Status) -> &'static str { s.as_str() }

pub fn decode_status(s: &str) -> Result<Status> { Ok(s.parse()?) }

// ─── launch_success ──────────────────────────────────────────────────────────

pub fn encode_success(s: Option<bool>) -> Option<i64> { s.map(i64::from) }

pub fn decode_success(v: Option<i64>) -> Option<bool> { v.map(|n| n != 0) }

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw column values read directly from a `launches` row.
pub struct RawLaunchRow {
  pub launch_id:      String,
  pub flight_number:  i64,
  pub mission_name:   String,
  pub rocket_name:    String,
  pub launch_date:    String,
  pub launch_success: Option<i64>,
  pub launch_site:    Option<String>,
  pub details:        Option<String>,
  pub status:         String,
  pub last_updated:   String,
}

impl RawLaunchRow {
  /// Read the columns of a `SELECT *`-ordered row.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      launch_id:      row.get(0)?,
      flight_number:  row.get(1)?,
      mission_name:   row.get(2)?,
      rocket_name:    row.get(3)?,
      launch_date:    row.get(4)?,
      launch_success: row.get(5)?,
      launch_site:    row.get(6)?,
      details:        row.get(7)?,
      status:         row.get(8)?,
      last_updated:   row.get(9)?,
    })
  }

  pub fn into_launch(self) -> Result<Launch> {
    Ok(Launch {
      launch_id:      self.launch_id,
      flight_number:  self.flight_number,
      mission_name:   self.mission_name,
      rocket_name:    self.rocket_name,
      launch_date:    self.launch_date,
      launch_success: decode_success(self.launch_success),
      launch_site:    self.launch_site,
      details:        self.details,
      status:         decode_status(&self.status)?,
      last_updated:   decode_dt(&self.last_updated)?,
    })
  }
}

/// Column list matching [`RawLaunchRow::from_row`]'s ordering.
pub const LAUNCH_COLUMNS: &str = "launch_id, flight_number, mission_name, \
   rocket_name, launch_date, launch_success, launch_site, details, status, \
   last_updated";
