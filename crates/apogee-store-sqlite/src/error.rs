//! Error type for `apogee-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A `status` column value outside the four known discriminants.
  #[error(transparent)]
  Status(#[from] apogee_core::launch::UnknownStatus),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
