//! Raw field-keyed records and their normalization into [`Paper`]s.
//!
//! A [`RawRecord`] is what the retrieval layer hands over: a mapping from MEDLINE field
//! tag (`PMID`, `TI`, `DP`, `AU`, `AD`, ...) to either a single text value or a list of
//! values. [`RawRecord::to_paper`] turns it into a [`Paper`]:
//!
//! - `PMID` is required, everything else is optional
//! - A missing `TI` becomes [`NO_TITLE`]
//! - `DP` is parsed by [`publication_date`]
//! - `AU[i]` is paired with `AD[i]`; authors without a matching `AD` entry get no
//!   affiliations
//! - Each `AD` entry is split on `;`, and the pieces containing `@` are moved out of the
//!   affiliations, the first of them becoming the author's email
//! - Only the first author is marked as corresponding
//!
//! # Examples
//!
//! ```
//! use pubmed_papers::record::{tag, RawRecord};
//!
//! let record = RawRecord::default()
//!   .with_text(tag::PMID, "31452104")
//!   .with_text(tag::TITLE, "A study")
//!   .with_text(tag::DATE, "2019 Aug 26")
//!   .with_list(tag::AUTHORS, ["Doe J", "Roe R"])
//!   .with_list(tag::AFFILIATIONS, ["MIT; jdoe@mit.edu", "Genentech Inc"]);
//!
//! let paper = record.to_paper().unwrap();
//! assert_eq!(paper.authors[0].email.as_deref(), Some("jdoe@mit.edu"));
//! assert_eq!(paper.company_affiliations(), vec!["Genentech Inc"]);
//! ```

use super::*;

/// MEDLINE field tags read by the normalizer.
pub mod tag {
  /// PubMed identifier
  pub const PMID: &str = "PMID";
  /// Title
  pub const TITLE: &str = "TI";
  /// Date of publication
  pub const DATE: &str = "DP";
  /// Author names
  pub const AUTHORS: &str = "AU";
  /// Author affiliations, parallel to [`AUTHORS`]
  pub const AFFILIATIONS: &str = "AD";
}

/// Title used when a record has none.
pub const NO_TITLE: &str = "No title available";

/// Value of a single record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
  /// A single text value
  Text(String),
  /// A repeatable field, in source order
  List(Vec<String>),
}

/// An unprocessed bibliographic record keyed by field tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
  /// Field values by tag
  fields: BTreeMap<String, Field>,
}

impl RawRecord {
  /// Sets a text field, replacing any previous value.
  pub fn with_text(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
    self.insert(tag, Field::Text(value.into()));
    self
  }

  /// Sets a list field, replacing any previous value.
  pub fn with_list<I, S>(mut self, tag: impl Into<String>, values: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>, {
    self.insert(tag, Field::List(values.into_iter().map(Into::into).collect()));
    self
  }

  /// Sets a field, returning the previous value if there was one.
  pub fn insert(&mut self, tag: impl Into<String>, field: Field) -> Option<Field> {
    self.fields.insert(tag.into(), field)
  }

  /// Raw access to a field.
  pub fn get(&self, tag: &str) -> Option<&Field> { self.fields.get(tag) }

  /// Returns `true` if the record has no fields at all.
  pub fn is_empty(&self) -> bool { self.fields.is_empty() }

  /// A field as text. List fields are joined with a single space.
  pub fn text(&self, tag: &str) -> Option<String> {
    match self.fields.get(tag)? {
      Field::Text(text) => Some(text.clone()),
      Field::List(values) => Some(values.join(" ")),
    }
  }

  /// A field as a list. A text field is a one-element list, a missing field an empty one.
  pub fn list(&self, tag: &str) -> Vec<&str> {
    match self.fields.get(tag) {
      Some(Field::Text(text)) => vec![text.as_str()],
      Some(Field::List(values)) => values.iter().map(String::as_str).collect(),
      None => Vec::new(),
    }
  }

  /// The record's PubMed identifier, if present.
  pub fn pubmed_id(&self) -> Option<String> { self.text(tag::PMID) }

  /// Normalizes this record into a [`Paper`].
  ///
  /// # Errors
  ///
  /// Returns [`PapersError::MalformedRecord`] if the record has no `PMID`. Every other
  /// missing or malformed field degrades to a default instead of failing.
  pub fn to_paper(&self) -> Result<Paper> {
    let pubmed_id =
      self.pubmed_id().ok_or_else(|| PapersError::MalformedRecord(tag::PMID.to_string()))?;
    let title = self.text(tag::TITLE).unwrap_or_else(|| NO_TITLE.to_string());
    let publication_date = publication_date(self.text(tag::DATE).as_deref());

    let affiliations = self.list(tag::AFFILIATIONS);
    let authors = self
      .list(tag::AUTHORS)
      .into_iter()
      .enumerate()
      .map(|(index, name)| {
        let (affiliations, email) =
          affiliations.get(index).map(|blob| split_affiliations(blob)).unwrap_or_default();
        Author { name: name.to_string(), email, affiliations, is_corresponding: index == 0 }
      })
      .collect();

    Ok(Paper { pubmed_id, title, publication_date, authors })
  }
}

impl TryFrom<&RawRecord> for Paper {
  type Error = PapersError;

  fn try_from(record: &RawRecord) -> Result<Self> { record.to_paper() }
}

impl FromIterator<(String, Field)> for RawRecord {
  fn from_iter<T: IntoIterator<Item = (String, Field)>>(iter: T) -> Self {
    Self { fields: iter.into_iter().collect() }
  }
}

/// Splits one affiliation blob into its affiliations and an optional email.
///
/// Pieces are separated by `;` and trimmed. Every piece containing `@` is dropped from the
/// affiliations; the first one is kept as the email.
pub fn split_affiliations(blob: &str) -> (Vec<String>, Option<String>) {
  let mut email = None;
  let mut affiliations = Vec::new();
  for piece in blob.split(';').map(str::trim) {
    if !piece.contains('@') {
      affiliations.push(piece.to_string());
    } else if email.is_none() {
      email = Some(piece.to_string());
    }
  }
  (affiliations, email)
}

/// Parses a `DP` value, falling back to today's date (UTC) when it cannot be read.
///
/// See [`parse_publication_date`] for the accepted formats.
pub fn publication_date(raw: Option<&str>) -> NaiveDate {
  raw.and_then(parse_publication_date).unwrap_or_else(|| {
    debug!("Unreadable publication date {raw:?}, using the current date");
    Utc::now().date_naive()
  })
}

/// Parses a `DP` value.
///
/// Accepted, in order:
/// 1. `"YYYY Mon DD"`, e.g. `"2021 Jan 05"`
/// 2. A leading 4-digit year, e.g. `"2019"` or `"2019 Spring"`, giving January 1st
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pubmed_papers::record::parse_publication_date;
///
/// assert_eq!(parse_publication_date("2021 Jan 05"), NaiveDate::from_ymd_opt(2021, 1, 5));
/// assert_eq!(parse_publication_date("2019 Aug"), NaiveDate::from_ymd_opt(2019, 1, 1));
/// assert_eq!(parse_publication_date("Spring"), None);
/// ```
pub fn parse_publication_date(raw: &str) -> Option<NaiveDate> {
  if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y %b %d") {
    return Some(date);
  }

  let year = raw.split_whitespace().next()?;
  if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  NaiveDate::from_ymd_opt(year.parse().ok()?, 1, 1)
}
