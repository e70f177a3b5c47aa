use super::*;

fn ids(papers: &[Paper]) -> Vec<&str> {
  papers.iter().map(|paper| paper.pubmed_id.as_str()).collect()
}

#[traced_test]
#[tokio::test]
async fn test_search_in_batches() {
  let source = FixtureSource::new();
  let papers = search_company_papers(&source, "cancer", None, 2).await;

  assert_eq!(ids(&papers), vec!["30000001", "30000005"]);
  assert_eq!(source.requested(), vec![
    vec!["0".to_string(), "1".to_string()],
    vec!["2".to_string(), "3".to_string()],
    vec!["4".to_string()],
  ]);
  assert!(logs_contain("Found 5 matching papers"));
}

#[tokio::test]
async fn test_search_respects_max_results() {
  let source = FixtureSource::new();
  let papers = search_company_papers(&source, "cancer", Some(2), 100).await;

  assert_eq!(ids(&papers), vec!["30000001"]);
  assert_eq!(source.requested().len(), 1);
}

#[tokio::test]
async fn test_zero_batch_size_fetches_one_at_a_time() {
  let source = FixtureSource::new();
  let papers = search_company_papers(&source, "cancer", None, 0).await;

  assert_eq!(papers.len(), 2);
  assert_eq!(source.requested().len(), 5);
}

#[traced_test]
#[tokio::test]
async fn test_failed_search_is_empty() {
  let source = FixtureSource::new().failing_search();
  let papers = search_company_papers(&source, "cancer", None, 2).await;

  assert!(papers.is_empty());
  assert!(source.requested().is_empty());
  assert!(logs_contain("Error searching PubMed"));
}

#[tokio::test]
async fn test_no_matches_is_empty() {
  let source = FixtureSource::new().without_results();
  let papers = search_company_papers(&source, "nothing", None, 2).await;

  assert!(papers.is_empty());
  assert!(source.requested().is_empty());
}

#[traced_test]
#[tokio::test]
async fn test_failed_fetch_keeps_earlier_papers() {
  let source = FixtureSource::new().failing_fetch(1);
  let papers = search_company_papers(&source, "cancer", None, 2).await;

  assert_eq!(ids(&papers), vec!["30000001"]);
  assert_eq!(source.requested().len(), 2);
  assert!(logs_contain("Error retrieving records"));
}

#[tokio::test]
async fn test_search_through_trait_object() {
  let source: Box<dyn RecordSource> = Box::new(FixtureSource::new());
  let papers = search_company_papers(source.as_ref(), "cancer", None, 10).await;
  assert_eq!(papers.len(), 2);
}
