//! Console output and prompts.

use console::Emoji;
use dialoguer::Confirm;

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for work in progress
pub static WORKING_PREFIX: &str = "» ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "! ";
/// Prefix for user prompts
pub static PROMPT_PREFIX: &str = "❯ ";
/// Branch of a paper listing
pub static ITEM_PREFIX: &str = "├─";
/// Last branch of a paper listing
pub static LAST_ITEM_PREFIX: &str = "└─";
/// Paper heading
pub static PAPER: Emoji<'static, 'static> = Emoji("📄 ", "");

/// What to show the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// A listing of papers
  Papers(&'a [Paper]),
  /// Progress of a running step
  Working(&'a str),
  /// A completed step
  Success(&'a str),
  /// Something the user should notice
  Warning(&'a str),
  /// Plain information
  Info(&'a str),
}

/// How the commands talk to the user.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Shows `content` to the user.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Interaction on the controlling terminal.
#[derive(Debug, Clone, Copy)]
pub struct Terminal {
  /// Answer every confirmation with yes
  accept_defaults: bool,
}

impl Terminal {
  /// Creates a terminal interaction, optionally answering every confirmation with yes.
  pub fn new(accept_defaults: bool) -> Self { Self { accept_defaults } }
}

impl UserInteraction for Terminal {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    Ok(
      Confirm::new()
        .with_prompt(format!("{}{message}", style(PROMPT_PREFIX).yellow()))
        .default(false)
        .wait_for_newline(true)
        .interact()?,
    )
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Papers(papers) => {
        for paper in papers {
          print_paper(paper);
        }
      },
      ResponseContent::Working(message) =>
        println!("{} {}", style(WORKING_PREFIX).cyan(), style(message).cyan()),
      ResponseContent::Success(message) =>
        println!("{} {}", style(SUCCESS_PREFIX).green(), style(message).green()),
      ResponseContent::Warning(message) =>
        println!("{} {}", style(WARNING_PREFIX).yellow(), style(message).yellow()),
      ResponseContent::Info(message) => println!("{} {message}", style(INFO_PREFIX).blue()),
    }
    Ok(())
  }
}

/// Prints one paper as a small tree.
fn print_paper(paper: &Paper) {
  let authors: Vec<_> =
    paper.non_academic_authors().iter().map(|author| author.name.as_str()).collect();
  let email = paper.corresponding_author_email().unwrap_or(export::NOT_AVAILABLE);

  println!(
    "\n{}{} {}",
    PAPER,
    style(&paper.pubmed_id).white().bold(),
    style(&paper.title).white()
  );
  println!("   {} Published: {}", style(ITEM_PREFIX).cyan(), paper.publication_date);
  println!("   {} Company authors: {}", style(ITEM_PREFIX).cyan(), authors.join("; "));
  println!(
    "   {} Companies: {}",
    style(ITEM_PREFIX).cyan(),
    style(paper.company_affiliations().join("; ")).yellow()
  );
  println!("   {} Corresponding email: {}", style(LAST_ITEM_PREFIX).cyan(), email);
}
