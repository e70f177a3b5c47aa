//! Errors of the `get-papers-list` binary.

use thiserror::Error;

use super::*;

/// Failures that end a `get-papers-list` run.
#[derive(Error, Debug)]
pub enum CliError {
  /// Error from the papers library
  #[error(transparent)]
  Papers(#[from] PapersError),

  /// Reading input or writing output failed
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// Interactive prompt failed
  #[error(transparent)]
  Dialog(#[from] dialoguer::Error),

  /// Neither a query nor a MEDLINE file was given
  #[error("a search query is required unless --medline is given")]
  MissingQuery,
}

/// Result type of the binary.
pub type Result<T> = core::result::Result<T, CliError>;
