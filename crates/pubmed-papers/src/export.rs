//! CSV report output.
//!
//! Every paper becomes one row with the columns of [`COLUMNS`]. Multi-valued cells are
//! joined with `"; "` and a missing corresponding-author email is written as
//! [`NOT_AVAILABLE`]. The header row is written even when there are no papers.
//!
//! # Examples
//!
//! ```
//! use pubmed_papers::{export, paper::Paper};
//!
//! let mut out = Vec::new();
//! export::write_csv(&Vec::<Paper>::new(), &mut out).unwrap();
//! assert_eq!(
//!   String::from_utf8(out).unwrap(),
//!   "PubMed ID,Title,Publication Date,Non-academic Author(s),Company Affiliation(s),\
//!    Corresponding Author Email\n"
//! );
//! ```

use std::io::Write;

use super::*;

/// Column headers of the report, in order.
pub const COLUMNS: [&str; 6] = [
  "PubMed ID",
  "Title",
  "Publication Date",
  "Non-academic Author(s)",
  "Company Affiliation(s)",
  "Corresponding Author Email",
];

/// Written in place of a missing corresponding-author email.
pub const NOT_AVAILABLE: &str = "Not available";

/// Separator for multi-valued cells.
const JOIN: &str = "; ";

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
  /// PubMed identifier
  pub pubmed_id:                  String,
  /// Paper title
  pub title:                      String,
  /// Publication date as `YYYY-MM-DD`
  pub publication_date:           String,
  /// Names of company-affiliated authors
  pub non_academic_authors:       String,
  /// Sorted company affiliations
  pub company_affiliations:       String,
  /// Corresponding author email or [`NOT_AVAILABLE`]
  pub corresponding_author_email: String,
}

impl From<&Paper> for ReportRow {
  fn from(paper: &Paper) -> Self {
    Self {
      pubmed_id:                  paper.pubmed_id.clone(),
      title:                      paper.title.clone(),
      publication_date:           paper.publication_date.format("%Y-%m-%d").to_string(),
      non_academic_authors:       paper
        .non_academic_authors()
        .iter()
        .map(|author| author.name.as_str())
        .collect::<Vec<_>>()
        .join(JOIN),
      company_affiliations:       paper.company_affiliations().join(JOIN),
      corresponding_author_email: paper
        .corresponding_author_email()
        .unwrap_or(NOT_AVAILABLE)
        .to_string(),
    }
  }
}

/// Writes the report for `papers` as CSV, returning the number of data rows.
pub fn write_csv<'a, W: Write>(
  papers: impl IntoIterator<Item = &'a Paper>,
  writer: W,
) -> Result<usize> {
  let mut out = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
  out.write_record(COLUMNS)?;

  let mut rows = 0;
  for paper in papers {
    out.serialize(ReportRow::from(paper))?;
    rows += 1;
  }
  out.flush()?;
  Ok(rows)
}

/// Writes the report to a file, creating its parent directories.
pub fn write_csv_file<'a>(
  papers: impl IntoIterator<Item = &'a Paper>,
  path: impl AsRef<Path>,
) -> Result<usize> {
  let path = path.as_ref();
  if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent)?;
  }
  let file = std::fs::File::create(path)?;
  let rows = write_csv(papers, file)?;
  debug!("Wrote {rows} papers to {}", path.display());
  Ok(rows)
}
