//! Command line tool listing PubMed papers with pharmaceutical or biotech company authors.
//!
//! The search uses PubMed's query syntax. Every matching paper with at least one author
//! affiliated with a company is reported, either on the console or as a CSV file.
//!
//! # Usage
//!
//! ```bash
//! # List company papers on the console
//! get-papers-list "cancer immunotherapy"
//!
//! # Save the report as CSV, only looking at the first 10 results
//! get-papers-list "cancer immunotherapy" --file results/papers.csv --test
//!
//! # Classify a MEDLINE export instead of querying PubMed
//! get-papers-list --medline pubmed-export.txt -f papers.csv
//! ```
//!
//! Logging goes to stderr. `-v` may be repeated for more detail, `--debug` jumps straight
//! to debug output, and `RUST_LOG` overrides both.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use clap::{builder::ArgAction, Parser};
use console::style;
use pubmed_papers::{
  client::PubMedClient,
  error::PapersError,
  export, medline,
  paper::Paper,
  pipeline::{search_company_papers, CompanyPapers},
  Config,
};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod error;
pub mod interaction;
pub mod search;

use crate::{error::*, interaction::*, search::*};

/// Number of results considered in test mode.
pub const TEST_LIMIT: usize = 10;

/// Command line arguments of `get-papers-list`
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Fetch research papers from PubMed and identify those with company affiliations"
)]
pub struct Cli {
  /// PubMed search query, e.g. "cancer AND 2023[dp]"
  #[arg(required_unless_present = "medline")]
  query: Option<String>,

  /// Output CSV file path. Without it the results are printed to the console
  #[arg(short, long)]
  file: Option<PathBuf>,

  /// Enable debug logging
  #[arg(short, long)]
  debug: bool,

  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(short, long, action = ArgAction::Count, help = "Increase logging verbosity")]
  verbose: u8,

  /// Test mode: only look at the first 10 results
  #[arg(short, long)]
  test: bool,

  /// Contact email sent to NCBI, as their terms of service require
  #[arg(long)]
  email: Option<String>,

  /// Configuration file. Defaults to the platform config directory
  #[arg(long)]
  config: Option<PathBuf>,

  /// Read records from a local MEDLINE file instead of querying PubMed
  #[arg(long, value_name = "PATH")]
  medline: Option<PathBuf>,

  /// Overwrite an existing output file without asking
  #[arg(long, short = 'y')]
  yes: bool,
}

/// Configures the logging system.
///
/// The verbosity levels are:
/// - 0: warn (default)
/// - 1: info
/// - 2: debug
/// - 3+: trace
///
/// `--debug` raises the level to at least debug.
fn setup_logging(verbosity: u8, debug: bool) {
  let verbosity = if debug { verbosity.max(2) } else { verbosity };
  let filter = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(debug)
    .with_line_number(debug)
    .with_target(debug)
    .init();
}

/// Entry point for `get-papers-list`.
///
/// Exits with status 1 after printing the error when the search cannot be completed.
#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  setup_logging(cli.verbose, cli.debug);
  trace!("Parsed arguments: {cli:?}");

  let terminal = Terminal::new(cli.yes);
  if let Err(e) = search(&terminal, &cli).await {
    eprintln!("{} Error: {e}", style(ERROR_PREFIX).red());
    std::process::exit(1);
  }
}
