use std::{
  error::Error,
  sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
  },
};

use async_trait::async_trait;
use chrono::NaiveDate;
use pubmed_papers::{export, medline, pipeline::search_company_papers, prelude::*};
use tempfile::tempdir;
use tracing_test::traced_test;

mod workflows;

pub type TestResult<T> = std::result::Result<T, Box<dyn Error>>;

/// MEDLINE fixture with two company papers among five records.
pub const SAMPLE_MEDLINE: &str = include_str!("data/sample.medline");

/// In-memory [`RecordSource`] serving the sample fixture.
pub struct FixtureSource {
  /// Records served by `fetch`, keyed by position in the fixture
  records:     Vec<RawRecord>,
  /// Identifiers returned by `search`
  ids:         Vec<String>,
  /// Make `search` fail
  fail_search: bool,
  /// Make the n-th `fetch` call (0-based) fail
  fail_fetch:  Option<usize>,
  /// Number of `fetch` calls so far
  fetches:     AtomicUsize,
  /// Batches requested from `fetch`
  requested:   Mutex<Vec<Vec<String>>>,
}

impl FixtureSource {
  pub fn new() -> Self {
    let records = medline::parse(SAMPLE_MEDLINE);
    let ids = (0..records.len()).map(|index| index.to_string()).collect();
    Self {
      records,
      ids,
      fail_search: false,
      fail_fetch: None,
      fetches: AtomicUsize::new(0),
      requested: Mutex::new(Vec::new()),
    }
  }

  pub fn failing_search(mut self) -> Self {
    self.fail_search = true;
    self
  }

  pub fn failing_fetch(mut self, call: usize) -> Self {
    self.fail_fetch = Some(call);
    self
  }

  pub fn without_results(mut self) -> Self {
    self.ids.clear();
    self
  }

  pub fn requested(&self) -> Vec<Vec<String>> { self.requested.lock().unwrap().clone() }
}

#[async_trait]
impl RecordSource for FixtureSource {
  async fn search(&self, _query: &str, max_results: Option<usize>) -> Result<Vec<String>> {
    if self.fail_search {
      return Err(PapersError::ApiError("search unavailable".to_string()));
    }
    let limit = max_results.unwrap_or(usize::MAX);
    Ok(self.ids.iter().take(limit).cloned().collect())
  }

  async fn fetch(&self, ids: &[String]) -> Result<Vec<RawRecord>> {
    let call = self.fetches.fetch_add(1, Ordering::SeqCst);
    self.requested.lock().unwrap().push(ids.to_vec());
    if self.fail_fetch == Some(call) {
      return Err(PapersError::ApiError("fetch unavailable".to_string()));
    }
    Ok(
      ids
        .iter()
        .filter_map(|id| id.parse::<usize>().ok())
        .filter_map(|index| self.records.get(index).cloned())
        .collect(),
    )
  }
}
