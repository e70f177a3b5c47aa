//! Company vs. academic classification of free-text affiliations.
//!
//! An affiliation is considered a company when it carries at least one company keyword
//! (`inc`, `gmbh`, `pharma`, ...) and no academic keyword (`university`, `hospital`,
//! `research`, ...). The academic vocabulary always wins, so an affiliation such as
//! "Pharma Research Institute" is not a company.
//!
//! Each keyword is checked twice: as an exact token of the affiliation (whitespace split,
//! surrounding `.,()[]{}` stripped) and as a substring of the whole lower-cased string.
//! A keyword matches when either check succeeds.
//!
//! # Examples
//!
//! ```
//! use pubmed_papers::classify::is_company_affiliation;
//!
//! assert!(is_company_affiliation("Pfizer Inc, New York, USA"));
//! assert!(!is_company_affiliation("Novartis Institutes for BioMedical Research"));
//! ```

use super::*;

/// Characters trimmed from both ends of each affiliation token.
const TOKEN_PUNCTUATION: &[char] = &['.', ',', '(', ')', '[', ']', '{', '}'];

lazy_static! {
  static ref COMPANY_KEYWORDS: BTreeSet<&'static str> = [
    "inc", "corp", "ltd", "llc", "limited", "corporation", "company", "co",
    "pharmaceutical", "pharmaceuticals", "pharma", "pharm", "biotech", "therapeutics",
    "biosciences", "technologies", "labs", "laboratories", "ag", "gmbh", "sa", "bv", "nv", "plc",
  ]
  .into_iter()
  .collect();

  static ref ACADEMIC_KEYWORDS: BTreeSet<&'static str> = [
    "university", "college", "institute", "laboratory", "hospital", "clinic", "school",
    "centre", "center", "medical", "health", "research", "academy", "department", "faculty",
    "foundation", "consortium", "unit", "national", "federal", "ministry", "council",
    "association",
  ]
  .into_iter()
  .collect();
}

/// Keywords that mark an affiliation as a company.
pub fn company_keywords() -> &'static BTreeSet<&'static str> { &COMPANY_KEYWORDS }

/// Keywords that mark an affiliation as academic, governmental or healthcare. These veto
/// any company keyword found in the same affiliation.
pub fn academic_keywords() -> &'static BTreeSet<&'static str> { &ACADEMIC_KEYWORDS }

/// Returns `true` if the affiliation denotes a company and not an academic institution.
///
/// The check is ASCII case-insensitive, pure and total: empty or unusual input simply
/// classifies as not a company.
///
/// # Examples
///
/// ```
/// use pubmed_papers::classify::is_company_affiliation;
///
/// assert!(is_company_affiliation("Genentech Inc"));
/// assert!(is_company_affiliation("Roche Diagnostics GmbH, Penzberg, Germany"));
/// // Academic keywords veto company keywords
/// assert!(!is_company_affiliation("Pharma Research Institute"));
/// assert!(!is_company_affiliation(""));
/// ```
pub fn is_company_affiliation(affiliation: &str) -> bool {
  let lowered = affiliation.to_ascii_lowercase();
  let tokens: BTreeSet<&str> =
    lowered.split_whitespace().map(|word| word.trim_matches(TOKEN_PUNCTUATION)).collect();

  let mentions = |keyword: &&str| tokens.contains(*keyword) || lowered.contains(*keyword);

  COMPANY_KEYWORDS.iter().any(mentions) && !ACADEMIC_KEYWORDS.iter().any(mentions)
}

/// Returns `true` if any of the given affiliations is a company affiliation.
pub fn has_company_affiliation<I, S>(affiliations: I) -> bool
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>, {
  affiliations.into_iter().any(|affiliation| is_company_affiliation(affiliation.as_ref()))
}
