//! The search flow: collect company papers, then report them.

use std::path::Path;

use super::*;

/// Runs one search as described by the command line.
pub async fn search<I: UserInteraction>(interaction: &I, cli: &Cli) -> Result<()> {
  let papers = match &cli.medline {
    Some(path) => papers_from_medline(interaction, path, cli.test)?,
    None => {
      let query = cli.query.as_deref().ok_or(CliError::MissingQuery)?;
      let config = load_config(cli)?;
      papers_from_pubmed(interaction, &config, query, cli.test).await?
    },
  };

  if papers.is_empty() {
    interaction.reply(ResponseContent::Warning("No papers found with company affiliations."))?;
    if let Some(path) = &cli.file {
      if write_report(interaction, &papers, path)? {
        interaction.reply(ResponseContent::Warning(&format!(
          "Empty results file created at {}",
          path.display()
        )))?;
      }
    }
    return Ok(());
  }

  match &cli.file {
    Some(path) =>
      if write_report(interaction, &papers, path)? {
        interaction.reply(ResponseContent::Success(&format!(
          "Results saved to {} ({} papers found)",
          path.display(),
          papers.len()
        )))?;
      },
    None => {
      interaction.reply(ResponseContent::Papers(&papers))?;
      interaction.reply(ResponseContent::Success(&format!(
        "Found {} papers with company affiliations",
        papers.len()
      )))?;
    },
  }
  Ok(())
}

/// Loads the configuration named on the command line, or the default one if present, and
/// applies the `--email` override.
fn load_config(cli: &Cli) -> Result<Config> {
  let config = match &cli.config {
    Some(path) => Config::load(path)?,
    None => Config::load_or_default(Config::default_path())?,
  };
  Ok(match &cli.email {
    Some(email) => config.with_email(email),
    None => config,
  })
}

/// Queries PubMed for company papers.
async fn papers_from_pubmed<I: UserInteraction>(
  interaction: &I,
  config: &Config,
  query: &str,
  test: bool,
) -> Result<Vec<Paper>> {
  interaction.reply(ResponseContent::Working(if test {
    "Fetching papers from PubMed (test mode - first 10 papers)..."
  } else {
    "Fetching papers from PubMed..."
  }))?;

  debug!("Search query: {query}");
  let client = PubMedClient::new(config);
  Ok(search_company_papers(&client, query, test.then_some(TEST_LIMIT), config.batch_size).await)
}

/// Reads company papers from a MEDLINE file. In test mode only the first records are read.
fn papers_from_medline<I: UserInteraction>(
  interaction: &I,
  path: &Path,
  test: bool,
) -> Result<Vec<Paper>> {
  interaction.reply(ResponseContent::Working(&format!("Reading {}...", path.display())))?;

  let text = std::fs::read_to_string(path)?;
  let limit = if test { TEST_LIMIT } else { usize::MAX };
  let records = medline::Records::new(&text).take(limit);
  Ok(CompanyPapers::from_records(records).collect())
}

/// Writes the CSV report, asking before an existing file is replaced. Returns `false` when
/// the user keeps the existing file.
fn write_report<I: UserInteraction>(interaction: &I, papers: &[Paper], path: &Path) -> Result<bool> {
  if path.exists()
    && !interaction.confirm(&format!("{} already exists. Overwrite it?", path.display()))?
  {
    interaction.reply(ResponseContent::Info("Operation cancelled"))?;
    return Ok(false);
  }
  export::write_csv_file(papers, path)?;
  Ok(true)
}
