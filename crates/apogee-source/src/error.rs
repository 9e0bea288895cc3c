//! Error type for `apogee-source`.

use thiserror::Error;

/// A fetch-level failure. Always fatal to the run that issued the fetch.
#[derive(Debug, Error)]
pub enum Error {
  /// Transport failure, including the configured timeout elapsing.
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("source returned status {0}")]
  Status(u16),

  /// The response parsed as JSON but the top level is not a sequence.
  #[error("malformed payload: {0}")]
  Payload(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
