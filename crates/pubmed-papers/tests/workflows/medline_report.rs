use super::*;

#[traced_test]
#[test]
fn test_fixture_to_papers() {
  let papers: Vec<Paper> = CompanyPapers::from_records(medline::parse(SAMPLE_MEDLINE)).collect();

  let ids: Vec<_> = papers.iter().map(|paper| paper.pubmed_id.as_str()).collect();
  assert_eq!(ids, vec!["30000001", "30000005"]);
  assert!(logs_contain("Error processing paper unknown"));

  let first = &papers[0];
  assert_eq!(
    first.title,
    "Pembrolizumab plus chemotherapy in metastatic non-small-cell lung cancer: an updated \
     analysis."
  );
  assert_eq!(first.publication_date, NaiveDate::from_ymd_opt(2021, 1, 5).unwrap());
  let names: Vec<_> = first.non_academic_authors().iter().map(|a| a.name.as_str()).collect();
  assert_eq!(names, vec!["Garcia M", "Chen L"]);
  assert_eq!(first.company_affiliations(), vec![
    "Merck & Co., Inc., Rahway, NJ, USA.",
    "Pfizer Inc, New York, NY, USA"
  ]);
  // The corresponding author is academic but still supplies the email
  assert_eq!(first.corresponding_author_email(), Some("john.smith@hms.harvard.edu"));
  assert_eq!(first.authors[2].email.as_deref(), Some("li.chen@pfizer.com"));

  let last = &papers[1];
  assert_eq!(last.title, "No title available");
  assert_eq!(last.publication_date, NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
  assert_eq!(last.company_affiliations(), vec!["Roche Diagnostics GmbH, Penzberg, Germany"]);
  assert_eq!(last.corresponding_author_email(), Some("k.weber@roche.com"));
}

#[test]
fn test_fixture_report() -> TestResult<()> {
  let papers: Vec<Paper> = CompanyPapers::from_records(medline::parse(SAMPLE_MEDLINE)).collect();

  let dir = tempdir()?;
  let path = dir.path().join("report.csv");
  assert_eq!(export::write_csv_file(&papers, &path)?, 2);

  let mut reader = csv::Reader::from_path(&path)?;
  let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;
  assert_eq!(rows.len(), 2);
  assert_eq!(&rows[0][0], "30000001");
  assert_eq!(&rows[0][3], "Garcia M; Chen L");
  assert_eq!(&rows[1][2], "2019-01-01");
  assert_eq!(&rows[1][5], "k.weber@roche.com");
  Ok(())
}

#[test]
fn test_empty_report() -> TestResult<()> {
  let papers: Vec<Paper> = CompanyPapers::from_records(medline::parse("")).collect();
  assert!(papers.is_empty());

  let dir = tempdir()?;
  let path = dir.path().join("empty.csv");
  assert_eq!(export::write_csv_file(&papers, &path)?, 0);

  let mut reader = csv::Reader::from_path(&path)?;
  assert_eq!(reader.headers()?.len(), export::COLUMNS.len());
  assert_eq!(reader.records().count(), 0);
  Ok(())
}
