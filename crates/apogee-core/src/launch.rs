//! Launch — the canonical entity produced by one sync of one source record.
//!
//! A launch row carries the normalized source fields plus a derived [`Status`]
//! projection. On every re-sync the whole row is replaced with freshly
//! normalized values; fields are never merged and rows are never deleted.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Status ──────────────────────────────────────────────────────────────────

/// Derived launch outcome.
///
/// Recomputed from `launch_success` and `launch_date` on every sync; a status
/// arriving in source data is never trusted. Persisted only as a materialized
/// projection for querying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
  Success,
  Failure,
  Upcoming,
  Unknown,
}

impl Status {
  /// The string stored in the `status` column and accepted in queries.
  /// Must match the `rename_all = "lowercase"` serde tags above.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Success => "success",
      Self::Failure => "failure",
      Self::Upcoming => "upcoming",
      Self::Unknown => "unknown",
    }
  }
}

impl FromStr for Status {
  type Err = UnknownStatus;

  fn from_str(s: &str) -> Result<Self, UnknownStatus> {
    match s {
      "success" => Ok(Self::Success),
      "failure" => Ok(Self::Failure),
      "upcoming" => Ok(Self::Upcoming),
      "unknown" => Ok(Self::Unknown),
      other => Err(UnknownStatus(other.to_string())),
    }
  }
}

/// Returned when a string is not one of the four status discriminants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown status: {:?}", self.0)
  }
}

impl std::error::Error for UnknownStatus {}

// ─── Launch ──────────────────────────────────────────────────────────────────

/// Canonical launch record, keyed by `launch_id`.
///
/// `launch_id` is derived deterministically from the source record (the
/// decimal rendering of `flight_number`), so the same launch maps to the same
/// row across re-syncs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
  pub launch_id:      String,
  pub flight_number:  i64,
  pub mission_name:   String,
  pub rocket_name:    String,
  /// ISO 8601 timestamp exactly as received; kept verbatim even when it does
  /// not parse. Validity only affects status classification.
  pub launch_date:    String,
  /// `None` means the outcome is unknown or the launch has not occurred.
  pub launch_success: Option<bool>,
  pub launch_site:    Option<String>,
  pub details:        Option<String>,
  pub status:         Status,
  /// Assigned from the run clock each time the record is normalized.
  pub last_updated:   DateTime<Utc>,
}

impl Launch {
  /// The launch date as an instant, when it is valid RFC 3339.
  pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
    parse_launch_date(&self.launch_date)
  }

  /// The identifying fields carried in run summaries.
  pub fn reference(&self) -> LaunchRef {
    LaunchRef {
      flight_number: self.flight_number,
      mission_name:  self.mission_name.clone(),
    }
  }
}

/// Identifying fields only — what run summaries and listings point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRef {
  pub flight_number: i64,
  pub mission_name:  String,
}

/// Parse an RFC 3339 launch date, tolerating nothing else.
pub fn parse_launch_date(raw: &str) -> Option<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(raw)
    .ok()
    .map(|dt| dt.with_timezone(&Utc))
}
