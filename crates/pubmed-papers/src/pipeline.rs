//! Lazy filtering of raw record batches into company-affiliated papers.
//!
//! [`CompanyPapers`] walks a sequence of record batches one record at a time, normalizes
//! each record into a [`Paper`] and yields only papers with at least one company-affiliated
//! author. Nothing is normalized before it is asked for, so `take(n)` stops all work after
//! the `n`-th paper.
//!
//! The pipeline never hands an error to its consumer:
//! - A record that fails to normalize is logged and skipped
//! - A failed batch is logged and ends the sequence
//!
//! [`search_company_papers`] drives the pipeline from any [`RecordSource`].
//!
//! # Examples
//!
//! ```
//! use pubmed_papers::{pipeline::CompanyPapers, record::RawRecord};
//!
//! let records = vec![
//!   RawRecord::default()
//!     .with_text("PMID", "1")
//!     .with_list("AU", ["Doe J"])
//!     .with_list("AD", ["Pfizer Inc, New York"]),
//!   RawRecord::default().with_text("PMID", "2").with_list("AU", ["Roe R"]),
//! ];
//!
//! let ids: Vec<_> = CompanyPapers::from_records(records).map(|p| p.pubmed_id).collect();
//! assert_eq!(ids, vec!["1"]);
//! ```

use crate::client::RecordSource;

use super::*;

/// Iterator over the company-affiliated papers of a batched record sequence.
#[derive(Debug)]
pub struct CompanyPapers<I> {
  /// Batches not yet started
  batches: I,
  /// Cursor into the batch being consumed
  current: std::vec::IntoIter<RawRecord>,
  /// Set once the batch sequence is exhausted or failed
  done:    bool,
}

impl<I> CompanyPapers<I>
where I: Iterator<Item = Result<Vec<RawRecord>>>
{
  /// Creates a pipeline over a sequence of record batches.
  pub fn new(batches: impl IntoIterator<IntoIter = I>) -> Self {
    Self { batches: batches.into_iter(), current: Vec::new().into_iter(), done: false }
  }

  /// Pulls the next batch into the cursor. Returns `false` when there is nothing left.
  fn advance_batch(&mut self) -> bool {
    if self.done {
      return false;
    }
    match self.batches.next() {
      Some(Ok(batch)) => {
        debug!("Processing batch of {} records", batch.len());
        self.current = batch.into_iter();
        true
      },
      Some(Err(e)) => {
        error!("Error retrieving records: {e}");
        self.done = true;
        false
      },
      None => {
        self.done = true;
        false
      },
    }
  }
}

impl CompanyPapers<std::iter::Once<Result<Vec<RawRecord>>>> {
  /// Creates a pipeline over a single in-memory batch.
  pub fn from_records(records: impl IntoIterator<Item = RawRecord>) -> Self {
    Self::new(std::iter::once(Ok(records.into_iter().collect())))
  }
}

impl<I> Iterator for CompanyPapers<I>
where I: Iterator<Item = Result<Vec<RawRecord>>>
{
  type Item = Paper;

  fn next(&mut self) -> Option<Paper> {
    loop {
      let Some(record) = self.current.next() else {
        if self.advance_batch() {
          continue;
        }
        return None;
      };

      match record.to_paper() {
        Ok(paper) if paper.has_company_authors() => return Some(paper),
        Ok(paper) => trace!("Paper {} has no company-affiliated authors", paper.pubmed_id),
        Err(e) => warn!(
          "Error processing paper {}: {e}",
          record.pubmed_id().unwrap_or_else(|| "unknown".to_string())
        ),
      }
    }
  }
}

/// Searches a record source and returns the papers with company-affiliated authors.
///
/// Identifiers are fetched in chunks of `batch_size` and streamed through
/// [`CompanyPapers`]. A failed search or an empty result gives an empty vector; a failed
/// fetch ends the search but keeps the papers found so far. This function never fails.
///
/// `max_results` caps the number of identifiers requested from the search.
pub async fn search_company_papers<S>(
  source: &S,
  query: &str,
  max_results: Option<usize>,
  batch_size: usize,
) -> Vec<Paper>
where
  S: RecordSource + ?Sized,
{
  debug!("Searching PubMed with query: {query}");
  let ids = match source.search(query, max_results).await {
    Ok(ids) => ids,
    Err(e) => {
      error!("Error searching PubMed: {e}");
      return Vec::new();
    },
  };

  if ids.is_empty() {
    debug!("No papers found matching the query");
    return Vec::new();
  }
  debug!("Found {} matching papers", ids.len());

  let mut papers = Vec::new();
  for chunk in ids.chunks(batch_size.max(1)) {
    let batch = source.fetch(chunk).await;
    let failed = batch.is_err();
    papers.extend(CompanyPapers::new(std::iter::once(batch)));
    if failed {
      break;
    }
  }
  papers
}
