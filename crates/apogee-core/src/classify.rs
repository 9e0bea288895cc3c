//! Status classification — a pure function of outcome and date.

use chrono::{DateTime, Utc};

use crate::launch::{Status, parse_launch_date};

/// Derive a [`Status`] from the raw outcome and date fields.
///
/// Total over every input: a known outcome wins outright; an unknown outcome
/// is [`Status::Upcoming`] only when the date parses and lies strictly after
/// `now`. Everything else (unparseable date, past date) is
/// [`Status::Unknown`]. `now` is an explicit argument so one run classifies
/// against a single clock.
pub fn classify(
  launch_success: Option<bool>,
  launch_date:    &str,
  now:            DateTime<Utc>,
) -> Status {
  match launch_success {
    Some(true) => Status::Success,
    Some(false) => Status::Failure,
    None => match parse_launch_date(launch_date) {
      Some(date) if date > now => Status::Upcoming,
      _ => Status::Unknown,
    },
  }
}
