//! Error types for `apogee-core`.

use thiserror::Error;

/// A per-record normalization failure.
///
/// Always local to one record: the pipeline counts it and moves on to the
/// next record. It never aborts a run.
#[derive(Debug, Error)]
pub enum ParseError {
  /// The record is not an object of the expected shape.
  #[error("malformed record: {0}")]
  Shape(String),

  /// The identifying field is absent entirely.
  #[error("record has no flight_number")]
  MissingFlightNumber,

  /// The identifying field is present but not coercible to an integer.
  #[error("flight_number is not numeric: {0}")]
  FlightNumber(String),
}
