//! Reader for the MEDLINE text format.
//!
//! This is the format EFetch returns for `rettype=medline&retmode=text`:
//!
//! ```text
//! PMID- 31452104
//! TI  - Anti-PD-1 therapy in advanced melanoma: a long
//!       running title.
//! DP  - 2019 Aug 26
//! AU  - Doe J
//! AD  - Genentech Inc, South San Francisco, CA, USA.
//!
//! PMID- 31452105
//! ...
//! ```
//!
//! Each field line starts with a tag padded to four characters followed by `- `. Lines
//! starting with six spaces continue the previous field. Records are separated by blank
//! lines. Repeatable tags such as `AU` and `AD` become [`Field::List`]s, every other tag a
//! [`Field::Text`].
//!
//! # Examples
//!
//! ```
//! use pubmed_papers::medline;
//!
//! let text = "PMID- 1\nAU  - Doe J\nAU  - Roe R\n\nPMID- 2\nTI  - Second\n";
//! let records = medline::parse(text);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].list("AU"), vec!["Doe J", "Roe R"]);
//! assert_eq!(records[1].text("TI").as_deref(), Some("Second"));
//! ```

use crate::record::Field;

use super::*;

/// Prefix marking a continuation line.
const CONTINUATION: &str = "      ";

lazy_static! {
  static ref FIELD_LINE: Regex = Regex::new(r"^([A-Z][A-Z0-9]{1,3}) *- ?(.*)$").unwrap();

  /// Tags that may repeat within one record and are kept as lists.
  static ref LIST_TAGS: BTreeSet<&'static str> = [
    "AU", "FAU", "AD", "AUID", "LA", "PT", "MH", "OT", "AID", "IS", "RN", "SI", "GR", "PHST",
    "LID",
  ]
  .into_iter()
  .collect();
}

/// Parses every record in a MEDLINE document.
pub fn parse(text: &str) -> Vec<RawRecord> { Records::new(text).collect() }

/// Lazy iterator over the records of a MEDLINE document.
#[derive(Debug, Clone)]
pub struct Records<'a> {
  /// Remaining input
  lines: std::str::Lines<'a>,
}

impl<'a> Records<'a> {
  /// Starts reading records from `text`.
  pub fn new(text: &'a str) -> Self { Self { lines: text.lines() } }
}

impl Iterator for Records<'_> {
  type Item = RawRecord;

  fn next(&mut self) -> Option<RawRecord> {
    let mut builder = RecordBuilder::default();
    for line in self.lines.by_ref() {
      if line.trim().is_empty() {
        if builder.is_empty() {
          continue;
        }
        break;
      }
      builder.push_line(line);
    }

    if builder.is_empty() {
      None
    } else {
      Some(builder.finish())
    }
  }
}

/// Accumulates the lines of one record.
#[derive(Debug, Default)]
struct RecordBuilder {
  /// Values per tag, in order of appearance
  fields:   BTreeMap<String, Vec<String>>,
  /// Tag of the most recent field line, target of continuation lines
  last_tag: Option<String>,
}

impl RecordBuilder {
  fn is_empty(&self) -> bool { self.fields.is_empty() }

  fn push_line(&mut self, line: &str) {
    if let Some(rest) = line.strip_prefix(CONTINUATION) {
      let last_value = self
        .last_tag
        .as_ref()
        .and_then(|tag| self.fields.get_mut(tag))
        .and_then(|values| values.last_mut());
      match last_value {
        Some(value) => {
          value.push(' ');
          value.push_str(rest.trim());
        },
        None => trace!("Continuation line without a preceding field: {line:?}"),
      }
      return;
    }

    match FIELD_LINE.captures(line) {
      Some(captures) => {
        let tag = captures[1].to_string();
        let value = captures[2].trim_end().to_string();
        self.fields.entry(tag.clone()).or_default().push(value);
        self.last_tag = Some(tag);
      },
      None => trace!("Skipping unrecognized MEDLINE line: {line:?}"),
    }
  }

  fn finish(self) -> RawRecord {
    self
      .fields
      .into_iter()
      .map(|(tag, values)| {
        let field = if LIST_TAGS.contains(tag.as_str()) {
          Field::List(values)
        } else {
          Field::Text(values.join(" "))
        };
        (tag, field)
      })
      .collect()
  }
}
