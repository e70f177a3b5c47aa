//! Core paper and author types.
//!
//! A [`Paper`] owns its [`Author`]s and derives three views from them:
//!
//! - [`Paper::non_academic_authors`]: authors with at least one company affiliation
//! - [`Paper::company_affiliations`]: the sorted, de-duplicated company affiliations of
//!   those authors
//! - [`Paper::corresponding_author_email`]: the email of the first corresponding author
//!
//! Both types are plain values: they are built once (usually by
//! [`RawRecord::to_paper`](crate::record::RawRecord::to_paper)) and never mutated.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use pubmed_papers::paper::{Author, Paper};
//!
//! let paper = Paper {
//!   pubmed_id:        "12345".to_string(),
//!   title:            "A study".to_string(),
//!   publication_date: NaiveDate::from_ymd_opt(2021, 1, 5).unwrap(),
//!   authors:          vec![
//!     Author::new("A").with_affiliations(["MIT"]).with_email("a@x.com").corresponding(),
//!     Author::new("B").with_affiliations(["Genentech Inc"]),
//!   ],
//! };
//!
//! assert_eq!(paper.non_academic_authors().len(), 1);
//! assert_eq!(paper.company_affiliations(), vec!["Genentech Inc"]);
//! assert_eq!(paper.corresponding_author_email(), Some("a@x.com"));
//! ```

use super::*;

/// A research paper retrieved from PubMed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
  /// PubMed identifier (PMID), treated as an opaque string
  pub pubmed_id:        String,
  /// The paper's title
  pub title:            String,
  /// Publication date, see [`record::publication_date`](crate::record::publication_date)
  pub publication_date: NaiveDate,
  /// Authors in the order listed by the source record
  pub authors:          Vec<Author>,
}

/// A paper author with affiliation and contact information.
///
/// # Examples
///
/// ```
/// use pubmed_papers::paper::Author;
///
/// let author = Author::new("Jane Doe")
///   .with_affiliations(["Genentech Inc, South San Francisco, CA"])
///   .with_email("jane@gene.com");
///
/// assert!(author.has_company_affiliation());
/// assert!(!Author::new("John Doe").has_company_affiliation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
  /// Author's display name
  pub name:             String,
  /// Contact email, when one could be extracted from the affiliation text
  pub email:            Option<String>,
  /// Free-text institution strings in source order
  pub affiliations:     Vec<String>,
  /// Whether this author is treated as the corresponding author. Records carry no
  /// reliable marker, so only the first listed author is flagged.
  pub is_corresponding: bool,
}

impl Author {
  /// Creates an author with no email, no affiliations, not marked corresponding.
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), email: None, affiliations: Vec::new(), is_corresponding: false }
  }

  /// Sets the author's email.
  pub fn with_email(mut self, email: impl Into<String>) -> Self {
    self.email = Some(email.into());
    self
  }

  /// Replaces the author's affiliations.
  pub fn with_affiliations<I, S>(mut self, affiliations: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>, {
    self.affiliations = affiliations.into_iter().map(Into::into).collect();
    self
  }

  /// Marks the author as the corresponding author.
  pub fn corresponding(mut self) -> Self {
    self.is_corresponding = true;
    self
  }

  /// Returns `true` if any of the author's affiliations is a company affiliation.
  ///
  /// Computed from [`Author::affiliations`] on every call. Authors without affiliations are
  /// never company-affiliated.
  pub fn has_company_affiliation(&self) -> bool {
    classify::has_company_affiliation(&self.affiliations)
  }

  /// The author's affiliations that individually classify as a company.
  pub fn company_affiliations(&self) -> impl Iterator<Item = &str> {
    self
      .affiliations
      .iter()
      .map(String::as_str)
      .filter(|affiliation| classify::is_company_affiliation(affiliation))
  }
}

impl Paper {
  /// Authors with at least one company affiliation, in source order.
  pub fn non_academic_authors(&self) -> Vec<&Author> {
    self.authors.iter().filter(|author| author.has_company_affiliation()).collect()
  }

  /// Returns `true` if at least one author is company-affiliated.
  pub fn has_company_authors(&self) -> bool {
    self.authors.iter().any(Author::has_company_affiliation)
  }

  /// The company affiliations of all non-academic authors.
  ///
  /// Only affiliations that classify as a company on their own are included, so an
  /// author's academic affiliations never leak into this list. The result is sorted
  /// ascending and contains no duplicates.
  pub fn company_affiliations(&self) -> Vec<&str> {
    self
      .authors
      .iter()
      .flat_map(Author::company_affiliations)
      .collect::<BTreeSet<_>>()
      .into_iter()
      .collect()
  }

  /// Email of the first corresponding author that has a non-empty email.
  ///
  /// The corresponding author need not be company-affiliated.
  pub fn corresponding_author_email(&self) -> Option<&str> {
    self
      .authors
      .iter()
      .filter(|author| author.is_corresponding)
      .filter_map(|author| author.email.as_deref())
      .find(|email| !email.is_empty())
  }
}
