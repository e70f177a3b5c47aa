//! Record retrieval from PubMed through NCBI E-utilities.
//!
//! Retrieval happens in two steps:
//! 1. ESearch turns a query into a list of PubMed identifiers
//! 2. EFetch returns the MEDLINE records for a batch of identifiers
//!
//! Both steps sit behind the [`RecordSource`] trait so the rest of the crate (and tests)
//! can work against any source of raw records. [`PubMedClient`] is the implementation
//! backed by the live API.
//!
//! # Examples
//!
//! ```no_run
//! use pubmed_papers::{client::PubMedClient, prelude::*, Config};
//!
//! # async fn example() -> Result<()> {
//! let client = PubMedClient::new(&Config::default().with_email("me@example.com"));
//! let ids = client.search("crispr AND 2023[dp]", Some(20)).await?;
//! let records = client.fetch(&ids).await?;
//! println!("Fetched {} records", records.len());
//! # Ok(())
//! # }
//! ```

use super::*;

/// `retmax` sent to ESearch when the caller sets no limit.
pub const UNBOUNDED_RETMAX: usize = 100_000;

/// A source of raw PubMed records.
#[async_trait]
pub trait RecordSource: Send + Sync {
  /// Returns the identifiers of records matching `query`, at most `max_results` of them.
  async fn search(&self, query: &str, max_results: Option<usize>) -> Result<Vec<String>>;

  /// Returns the raw records for the given identifiers.
  async fn fetch(&self, ids: &[String]) -> Result<Vec<RawRecord>>;
}

/// [`RecordSource`] backed by the NCBI E-utilities HTTP API.
#[derive(Debug, Clone)]
pub struct PubMedClient {
  /// Shared HTTP client
  http:     reqwest::Client,
  /// E-utilities base URL without trailing slash
  base_url: String,
  /// Parameters sent with every request (`tool`, `email`, `api_key`)
  identity: Vec<(&'static str, String)>,
}

/// Envelope of an ESearch JSON response.
#[derive(Debug, Deserialize)]
struct SearchResponse {
  /// The search result proper
  esearchresult: SearchResult,
}

/// Body of an ESearch JSON response.
#[derive(Debug, Deserialize)]
struct SearchResult {
  /// Matching identifiers
  #[serde(default)]
  idlist: Vec<String>,
  /// Error reported by ESearch for malformed queries
  #[serde(rename = "ERROR")]
  error:  Option<String>,
}

impl PubMedClient {
  /// Creates a client from the given configuration.
  ///
  /// No request is made until [`RecordSource::search`] or [`RecordSource::fetch`] is
  /// called.
  pub fn new(config: &Config) -> Self {
    let mut identity = vec![("tool", config.tool.clone()), ("email", config.email.clone())];
    if let Some(api_key) = &config.api_key {
      identity.push(("api_key", api_key.clone()));
    }
    Self {
      http: reqwest::Client::new(),
      base_url: config.base_url.trim_end_matches('/').to_string(),
      identity,
    }
  }

  /// Full URL of an E-utilities endpoint, e.g. `esearch.fcgi`.
  fn endpoint(&self, name: &str) -> String { format!("{}/{name}", self.base_url) }

  /// Sends a GET request with the identity parameters and checks the status.
  async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<reqwest::Response> {
    let url = self.endpoint(endpoint);
    trace!("GET {url} with {params:?}");
    let response = self.http.get(&url).query(&self.identity).query(params).send().await?;

    if response.status().is_success() {
      Ok(response)
    } else {
      Err(PapersError::ApiError(format!("{endpoint} returned {}", response.status())))
    }
  }
}

#[async_trait]
impl RecordSource for PubMedClient {
  async fn search(&self, query: &str, max_results: Option<usize>) -> Result<Vec<String>> {
    let retmax = max_results.unwrap_or(UNBOUNDED_RETMAX);
    let params = search_params(query, retmax);
    let bytes = self.get("esearch.fcgi", &params).await?.bytes().await?;
    let response: SearchResponse = serde_json::from_slice(&bytes)?;

    if let Some(error) = response.esearchresult.error {
      return Err(PapersError::ApiError(error));
    }
    debug!("ESearch returned {} identifiers", response.esearchresult.idlist.len());
    Ok(response.esearchresult.idlist)
  }

  async fn fetch(&self, ids: &[String]) -> Result<Vec<RawRecord>> {
    if ids.is_empty() {
      return Ok(Vec::new());
    }
    let params = fetch_params(ids);
    let text = self.get("efetch.fcgi", &params).await?.text().await?;
    let records = medline::parse(&text);
    debug!("EFetch returned {} records for {} identifiers", records.len(), ids.len());
    Ok(records)
  }
}

/// Query parameters of an ESearch request.
fn search_params(query: &str, retmax: usize) -> Vec<(&'static str, String)> {
  vec![
    ("db", "pubmed".to_string()),
    ("term", query.to_string()),
    ("retmax", retmax.to_string()),
    ("retmode", "json".to_string()),
  ]
}

/// Query parameters of an EFetch request.
fn fetch_params(ids: &[String]) -> Vec<(&'static str, String)> {
  vec![
    ("db", "pubmed".to_string()),
    ("id", ids.join(",")),
    ("rettype", "medline".to_string()),
    ("retmode", "text".to_string()),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_identity_parameters() {
    let client = PubMedClient::new(&Config::default().with_email("me@example.com"));
    assert_eq!(client.identity, vec![
      ("tool", "pubmed-papers".to_string()),
      ("email", "me@example.com".to_string())
    ]);

    let client = PubMedClient::new(&Config::default().with_api_key("secret"));
    assert!(client.identity.contains(&("api_key", "secret".to_string())));
  }

  #[test]
  fn test_endpoint() {
    let client = PubMedClient::new(&Config::default().with_base_url("http://localhost:9000/"));
    assert_eq!(client.endpoint("esearch.fcgi"), "http://localhost:9000/esearch.fcgi");
  }

  #[test]
  fn test_request_parameters() {
    let search = search_params("cancer AND pharma", UNBOUNDED_RETMAX);
    assert!(search.contains(&("term", "cancer AND pharma".to_string())));
    assert!(search.contains(&("retmax", "100000".to_string())));

    let fetch = fetch_params(&["1".to_string(), "2".to_string()]);
    assert!(fetch.contains(&("id", "1,2".to_string())));
    assert!(fetch.contains(&("rettype", "medline".to_string())));
  }

  #[test]
  fn test_search_response() {
    let body = r#"{"header": {}, "esearchresult": {"count": "2", "idlist": ["11", "22"]}}"#;
    let response: SearchResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.esearchresult.idlist, vec!["11", "22"]);
    assert!(response.esearchresult.error.is_none());

    let body = r#"{"esearchresult": {"ERROR": "Invalid query"}}"#;
    let response: SearchResponse = serde_json::from_str(body).unwrap();
    assert!(response.esearchresult.idlist.is_empty());
    assert_eq!(response.esearchresult.error.as_deref(), Some("Invalid query"));
  }

  #[traced_test]
  #[tokio::test]
  async fn test_fetch_nothing() {
    let client = PubMedClient::new(&Config::default());
    assert!(client.fetch(&[]).await.unwrap().is_empty());
  }

  #[traced_test]
  #[tokio::test]
  async fn test_unreachable_server() {
    let client = PubMedClient::new(&Config::default().with_base_url("http://127.0.0.1:9"));
    assert!(client.search("cancer", Some(1)).await.is_err());
  }

  #[ignore = "requires network access to NCBI"]
  #[traced_test]
  #[tokio::test]
  async fn test_live_search_and_fetch() {
    let client = PubMedClient::new(&Config::default());
    let ids = client.search("pembrolizumab AND Merck", Some(3)).await.unwrap();
    assert!(!ids.is_empty());
    let records = client.fetch(&ids).await.unwrap();
    assert_eq!(records.len(), ids.len());
    assert!(records.iter().all(|record| record.pubmed_id().is_some()));
  }
}
