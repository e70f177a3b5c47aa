//! Error types for the pubmed-papers library.
//!
//! Classification and the derived views on [`Paper`](crate::paper::Paper) never fail. Errors come from three
//! places only:
//! - Normalizing a raw record that lacks its identifier
//! - Talking to the NCBI E-utilities API
//! - Reading configuration or writing reports
//!
//! # Examples
//!
//! ```
//! use pubmed_papers::{error::PapersError, record::RawRecord};
//!
//! let record = RawRecord::default().with_text("TI", "Untitled");
//! match record.to_paper() {
//!   Err(PapersError::MalformedRecord(field)) => assert_eq!(field, "PMID"),
//!   _ => unreachable!(),
//! }
//! ```

use thiserror::Error;

/// Error type alias used for the [`pubmed_papers`](crate) crate.
pub type Result<T> = core::result::Result<T, PapersError>;

/// Errors that can occur when retrieving and analyzing papers.
#[derive(Error, Debug)]
pub enum PapersError {
  /// A raw record is missing a required field.
  ///
  /// The string parameter names the missing MEDLINE tag (currently only `PMID` is
  /// required). The aggregation pipeline logs and skips such records.
  #[error("Malformed record: missing required field `{0}`")]
  MalformedRecord(String),

  /// A network request failed.
  ///
  /// This can occur when:
  /// - The network is unavailable
  /// - The server is unreachable
  /// - The request times out
  /// - TLS errors occur
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The E-utilities API answered with an error status or an unexpected body.
  #[error("API error: {0}")]
  ApiError(String),

  /// A JSON response body could not be decoded.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// Writing the CSV report failed.
  #[error(transparent)]
  Csv(#[from] csv::Error),

  /// A file system operation failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// A configuration file is not valid TOML for [`Config`](crate::Config).
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// A configuration value is out of range.
  #[error("{0}")]
  Config(String),
}
