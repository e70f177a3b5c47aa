//! PubMed paper retrieval and company-affiliation analysis library.
//!
//! `pubmed-papers` finds papers whose author list includes at least one person affiliated
//! with a for-profit organization (pharmaceutical, biotech and similar companies) rather
//! than an academic, governmental or healthcare institution. It provides:
//!
//! - Affiliation classification from free-text institution strings
//! - Paper and author types with derived company-affiliation views
//! - A MEDLINE text-format reader and record normalizer
//! - A lazy aggregation pipeline over batched records
//! - An NCBI E-utilities client for searching and fetching records
//! - CSV export of the per-paper report
//!
//! # Getting Started
//!
//! ```no_run
//! use pubmed_papers::{client::PubMedClient, export, pipeline::search_company_papers, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let config = Config::default().with_email("me@example.com");
//!   let client = PubMedClient::new(&config);
//!
//!   let papers = search_company_papers(&client, "cancer immunotherapy", Some(10), 100).await;
//!   export::write_csv(&papers, std::io::stdout())?;
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`classify`]: Company vs. academic affiliation rules
//! - [`paper`]: Core paper and author types
//! - [`record`]: Raw field-keyed records and their normalization into papers
//! - [`medline`]: MEDLINE text-format reader
//! - [`pipeline`]: Lazy filtering of record batches into company papers
//! - [`client`]: Record retrieval from PubMed
//! - [`export`]: CSV report output
//! - [`config`]: Client configuration
//! - [`prelude`]: Common traits and types for ergonomic imports

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  collections::{BTreeMap, BTreeSet},
  path::{Path, PathBuf},
};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod medline;
pub mod paper;
pub mod pipeline;
pub mod record;

pub use config::Config;

use crate::{
  error::*,
  paper::{Author, Paper},
  record::RawRecord,
};

/// Common traits and types for ergonomic imports.
///
/// # Usage
///
/// ```no_run
/// use pubmed_papers::prelude::*;
///
/// fn count(records: Vec<RawRecord>) -> usize { CompanyPapers::from_records(records).count() }
/// ```
pub mod prelude {
  pub use crate::{
    client::RecordSource,
    error::{PapersError, Result},
    paper::{Author, Paper},
    pipeline::CompanyPapers,
    record::RawRecord,
  };
}
