//! Record normalization — one raw source record into one canonical [`Launch`].
//!
//! Validation is strict and field-by-field: a record deserializes into
//! [`RawLaunch`] (every field optional), and [`normalize`] decides per field
//! what absence means. Nothing relies on implicit attribute presence.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::{
  classify::classify,
  error::ParseError,
  launch::Launch,
};

/// Fallback for absent name fields.
pub const UNKNOWN: &str = "Unknown";

// ─── Raw shapes ──────────────────────────────────────────────────────────────

/// One raw record as the source API returns it (v3 payload shape).
///
/// `flight_number` stays a [`Value`] so numeric strings can be coerced;
/// every other field either matches its expected type or fails the record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLaunch {
  pub flight_number:   Option<Value>,
  pub mission_name:    Option<String>,
  pub rocket:          Option<RawRocket>,
  pub launch_date_utc: Option<String>,
  pub launch_success:  Option<bool>,
  pub launch_site:     Option<RawSite>,
  pub details:         Option<String>,
}

/// Nested rocket object; only the name survives normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRocket {
  pub rocket_name: Option<String>,
}

/// Nested launch-site object. The long site name is preferred.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSite {
  pub site_name:      Option<String>,
  pub site_name_long: Option<String>,
}

// ─── Normalization ───────────────────────────────────────────────────────────

/// Normalize one raw record into a [`Launch`].
///
/// Missing optional fields receive their documented defaults and never fail.
/// The only failure modes are a record of the wrong shape and an absent or
/// non-numeric `flight_number` — the identifying field. `now` is the run
/// clock: it drives both status classification and the `last_updated` stamp.
pub fn normalize(raw: Value, now: DateTime<Utc>) -> Result<Launch, ParseError> {
  let raw: RawLaunch =
    serde_json::from_value(raw).map_err(|e| ParseError::Shape(e.to_string()))?;

  let flight_number = coerce_flight_number(raw.flight_number)?;
  let launch_date   = raw.launch_date_utc.unwrap_or_default();
  let status        = classify(raw.launch_success, &launch_date, now);

  Ok(Launch {
    launch_id: flight_number.to_string(),
    flight_number,
    mission_name: raw.mission_name.unwrap_or_else(|| UNKNOWN.to_string()),
    rocket_name: raw
      .rocket
      .and_then(|r| r.rocket_name)
      .unwrap_or_else(|| UNKNOWN.to_string()),
    launch_date,
    launch_success: raw.launch_success,
    launch_site: raw
      .launch_site
      .and_then(|s| s.site_name_long.or(s.site_name)),
    details: raw.details,
    status,
    last_updated: now,
  })
}

/// Accept a JSON integer or a decimal string; reject everything else.
fn coerce_flight_number(value: Option<Value>) -> Result<i64, ParseError> {
  match value {
    None | Some(Value::Null) => Err(ParseError::MissingFlightNumber),
    Some(Value::Number(n)) => n
      .as_i64()
      .ok_or_else(|| ParseError::FlightNumber(n.to_string())),
    Some(Value::String(s)) => s
      .trim()
      .parse()
      .map_err(|_| ParseError::FlightNumber(s)),
    Some(other) => Err(ParseError::FlightNumber(other.to_string())),
  }
}
