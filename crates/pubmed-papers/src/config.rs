//! Configuration for talking to NCBI E-utilities.
//!
//! NCBI asks every client to identify itself with a tool name and a contact email, and
//! accepts an optional API key for higher rate limits. These live in a TOML file,
//! by default at [`Config::default_path`]:
//!
//! ```toml
//! email = "me@example.com"
//! api_key = "0123456789abcdef"
//! batch_size = 200
//! ```
//!
//! Every field is optional; missing fields take the values of [`Config::default`].

use super::*;

/// Default contact email sent to NCBI.
pub const DEFAULT_EMAIL: &str = "pubmed.papers@example.com";

/// Default E-utilities base URL.
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default number of records fetched per EFetch request.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Client settings for PubMed retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Contact email sent with every request
  pub email:      String,
  /// Tool name sent with every request
  pub tool:       String,
  /// Optional NCBI API key
  pub api_key:    Option<String>,
  /// Base URL of the E-utilities endpoints
  pub base_url:   String,
  /// Number of records per EFetch request
  pub batch_size: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      email:      DEFAULT_EMAIL.to_string(),
      tool:       env!("CARGO_PKG_NAME").to_string(),
      api_key:    None,
      base_url:   DEFAULT_BASE_URL.to_string(),
      batch_size: DEFAULT_BATCH_SIZE,
    }
  }
}

impl Config {
  /// The platform configuration file location, e.g.
  /// `~/.config/pubmed-papers/config.toml` on Linux.
  pub fn default_path() -> PathBuf {
    dirs::config_dir()
      .unwrap_or_else(|| PathBuf::from("."))
      .join(env!("CARGO_PKG_NAME"))
      .join("config.toml")
  }

  /// Reads a configuration file.
  ///
  /// # Errors
  ///
  /// Fails if the file cannot be read, is not valid TOML, or sets `batch_size` to zero.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    let config: Self = toml::from_str(&content)?;
    config.validate()
  }

  /// Reads a configuration file, or returns the defaults if it does not exist.
  pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if path.exists() {
      Self::load(path)
    } else {
      debug!("No configuration at {}, using defaults", path.display());
      Ok(Self::default())
    }
  }

  /// Sets the contact email.
  pub fn with_email(mut self, email: impl Into<String>) -> Self {
    self.email = email.into();
    self
  }

  /// Sets the NCBI API key.
  pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
    self.api_key = Some(api_key.into());
    self
  }

  /// Sets the E-utilities base URL.
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Sets the EFetch batch size.
  pub fn with_batch_size(mut self, batch_size: usize) -> Self {
    self.batch_size = batch_size;
    self
  }

  /// Checks value ranges, returning the configuration unchanged if they hold.
  pub fn validate(self) -> Result<Self> {
    if self.batch_size == 0 {
      return Err(PapersError::Config("batch_size must be at least 1".to_string()));
    }
    Ok(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.email, DEFAULT_EMAIL);
    assert_eq!(config.tool, "pubmed-papers");
    assert_eq!(config.batch_size, 100);
    assert!(config.api_key.is_none());
    assert!(Config::default_path().ends_with("pubmed-papers/config.toml"));
  }

  #[test]
  fn test_builder() {
    let config = Config::default()
      .with_email("me@example.com")
      .with_api_key("key")
      .with_base_url("http://localhost:8080")
      .with_batch_size(5);
    assert_eq!(config.email, "me@example.com");
    assert_eq!(config.api_key.as_deref(), Some("key"));
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.batch_size, 5);
  }

  #[test]
  fn test_load_partial_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "email = \"me@example.com\"\nbatch_size = 20\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.email, "me@example.com");
    assert_eq!(config.batch_size, 20);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
  }

  #[test]
  fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(Config::load(&path), Err(PapersError::Io(_))));
    assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
  }

  #[test]
  fn test_invalid_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    std::fs::write(&path, "batch_size = \"many\"").unwrap();
    assert!(matches!(Config::load(&path), Err(PapersError::TomlDe(_))));

    std::fs::write(&path, "batch_size = 0").unwrap();
    assert!(matches!(Config::load(&path), Err(PapersError::Config(_))));
  }
}
