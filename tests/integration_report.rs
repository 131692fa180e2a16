//! Integration tests for the full ingest → analyse → report/chart workflow
//!
//! These tests run the pipeline on fixture files in `testdata/` and verify
//! the end-to-end results.

#![expect(clippy::unwrap_used)]

use chrono::{DateTime, TimeZone as _, Utc};
use datareport::charts;
use datareport::error::ReportError;
use datareport::report::{self, ReportGenerator};
use datareport::upload::{FileKind, UploadCollection, UploadedFile};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from("testdata").join(name)
}

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 2, 8, 0, 0).unwrap()
}

fn fixture_uploads() -> UploadCollection {
    let mut uploads = UploadCollection::new();
    let rejected = uploads.add_paths(&[fixture("sales.csv"), fixture("notes.txt")]);
    assert!(rejected.is_empty(), "fixtures should be accepted: {rejected:?}");
    uploads
}

#[test]
fn test_fixture_classification() {
    let uploads = fixture_uploads();
    let kinds: Vec<FileKind> = uploads.files().iter().map(UploadedFile::kind).collect();
    assert_eq!(kinds, vec![FileKind::Csv, FileKind::PlainText]);
}

#[test]
fn test_pdf_fixture_is_rejected() {
    let mut uploads = fixture_uploads();
    let rejected = uploads.add_paths(&[fixture("brochure.pdf")]);

    assert_eq!(uploads.len(), 2, "collection must be unchanged");
    assert!(matches!(
        rejected.as_slice(),
        [ReportError::UnsupportedFileType { name, .. }] if name == "brochure.pdf"
    ));
}

#[test]
fn test_csv_section_from_fixture() {
    let uploads = fixture_uploads();
    let md = report::generate(uploads.files(), fixed_time()).unwrap();

    assert!(md.contains("## File 1: sales.csv\n"));
    assert!(md.contains("- **Columns:** 5\n- **Rows:** 6\n"));
    assert!(md.contains("- **Headers:** month, region, revenue, cost, notes\n"));

    assert!(md.contains(
        "#### revenue\n- Total entries: 6\n- Unique values: 6\n\
         - Min: 1200.50\n- Max: 1610.00\n- Average: 1416.15\n- Sum: 7080.75\n"
    ));
    assert!(md.contains(
        "#### cost\n- Total entries: 5\n- Unique values: 5\n\
         - Min: 790.00\n- Max: 910.00\n- Average: 833.00\n- Sum: 4165.00\n"
    ));
    assert!(md.contains("#### notes\n- Total entries: 4\n- Unique values: 4\n\n"));

    assert!(md.contains(
        "| month | region | revenue | cost | notes |\n| --- | --- | --- | --- | --- |\n"
    ));
    assert!(md.contains("| Apr | South | 1500.25 | 845 | late Q1 close |\n"));
    assert!(!md.contains("| Jun |"), "preview stops after five rows");
}

#[test]
fn test_text_section_from_fixture() {
    let uploads = fixture_uploads();
    let md = report::generate(uploads.files(), fixed_time()).unwrap();

    assert!(md.contains("## File 2: notes.txt\n"));
    assert!(md.contains(
        "- **Lines:** 4\n- **Words:** 26\n- **Characters:** 158\n\
         - **Average words per line:** 6.5\n"
    ));
    assert!(md.contains("| the | 3 |\n| revenue | 2 |\n| quarterly | 1 |\n"));
    assert!(md.contains("| regions | 1 |\n\n"), "tenth entry closes the table");
    assert!(!md.contains("| south |"), "only ten words are listed");
    assert!(md.ends_with(
        "This report analyzed 2 file(s) and extracted key metrics and insights from the data.\n"
    ));
}

#[test]
fn test_report_is_deterministic_for_fixed_time() {
    let uploads = fixture_uploads();
    let generator = ReportGenerator::default();
    let first = generator.generate(uploads.files(), fixed_time()).unwrap();
    let second = generator.generate(uploads.files(), fixed_time()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_removed_file_is_excluded_from_report() {
    let mut uploads = fixture_uploads();
    let csv_id = uploads.first_csv().unwrap().id();
    uploads.remove(csv_id).unwrap();

    let md = report::generate(uploads.files(), fixed_time()).unwrap();
    assert!(md.contains("## File 1: notes.txt"));
    assert!(!md.contains("sales.csv"));
}

#[test]
fn test_empty_collection_is_no_files_error() {
    let uploads = UploadCollection::new();
    assert!(matches!(
        report::generate(uploads.files(), fixed_time()),
        Err(ReportError::NoFiles)
    ));
}

#[test]
fn test_chart_data_from_fixture() {
    let uploads = fixture_uploads();
    let data = charts::from_uploads(uploads.files());

    let labels: Vec<&str> = data.time_series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);

    let march = data.time_series.get(2).unwrap();
    assert_eq!(march.value, 0.0, "n/a revenue plots as 0");
    assert_eq!(march.value2, Some(790.0));

    let slices: Vec<(&str, f64)> = data
        .distribution
        .iter()
        .map(|s| (s.label.as_str(), s.value))
        .collect();
    assert_eq!(slices, vec![("revenue", 7081.0), ("cost", 4165.0)]);

    let summary = data.summary_metrics.unwrap();
    assert_eq!(summary.total.annotation, "6 rows");
    assert_eq!(summary.average.annotation, "revenue");
    assert_eq!(summary.minimum.value, 1200.5);
    assert_eq!(summary.maximum.value, 1610.0);
}

#[test]
fn test_write_report_to_disk() {
    let uploads = fixture_uploads();
    let md = report::generate(uploads.files(), fixed_time()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = report::write_report(dir.path(), fixed_time(), &md).unwrap();

    assert_eq!(path.file_name().unwrap(), "report-2024-11-02.md");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), md);
}
