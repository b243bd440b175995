//! End-to-end pipeline test against a fake EDGAR submissions endpoint.
//!
//! Scenario: two CIKs; the first returns three filings (one of an excluded
//! form type), the second 404s. The report must carry exactly the two kept
//! rows, the failed list one entry, and the log the 404 message.

use calamine::{open_workbook, Data, Reader, Xlsx};
use serde_json::json;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use edgarwatch::config::{AppConfig, RatePolicy};
use edgarwatch::pipeline;

// ── helpers ──

fn test_config(dir: &TempDir, server: &MockServer) -> AppConfig {
    let mut config = AppConfig::with_base_dir(dir.path().to_path_buf());
    config.submissions_base = server.uri();
    config.rate = RatePolicy {
        min_interval: Duration::ZERO,
        jitter: Duration::ZERO,
    };
    config
}

fn submissions_body() -> serde_json::Value {
    json!({
        "name": "ACME CORP",
        "filings": {
            "recent": {
                "accessionNumber": [
                    "0000000111-24-000001",
                    "0000000111-24-000002",
                    "0000000111-24-000003"
                ],
                "filingDate": ["2024-05-01", "2024-05-02", "2024-05-03"],
                "form": ["10-K", "4", "8-K"],
                "primaryDocument": ["a.htm", "b.htm", "c.htm"]
            }
        }
    })
}

#[tokio::test]
async fn test_run_keeps_filtered_rows_and_records_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/CIK0000000111.json"))
        .and(header("user-agent", edgarwatch::config::DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(submissions_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/CIK0000000222.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, &server);
    std::fs::write(config.cik_list_path(), "111\n222\n").unwrap();

    let summary = pipeline::run(&config).await.unwrap();

    assert_eq!(summary.total_records, 2);
    assert_eq!(summary.successful_ciks.len(), 1);
    assert_eq!(summary.failed_ciks.len(), 1);
    assert_eq!(summary.failed_ciks[0].as_str(), "0000000222");

    // Report: header plus the two non-excluded filings.
    let mut workbook: Xlsx<_> = open_workbook(config.report_path()).unwrap();
    let range = workbook.worksheet_range_at(0).unwrap().unwrap();
    assert_eq!(range.height(), 3);
    assert_eq!(
        range.get((1, 6)).unwrap(),
        &Data::String("10-K".to_string())
    );
    assert_eq!(range.get((2, 6)).unwrap(), &Data::String("8-K".to_string()));
    // Optional fields absent upstream surface as the placeholder.
    assert_eq!(range.get((1, 5)).unwrap(), &Data::String("N/A".to_string()));
    // Derived URL for the first kept filing.
    assert_eq!(
        range.get((1, 9)).unwrap(),
        &Data::String(format!(
            "{}/111/000000011124000001/0000000111-24-000001-index.html",
            config.archives_base
        ))
    );

    // The log captures the fetch failure for the second CIK.
    let log = std::fs::read_to_string(config.log_path()).unwrap();
    assert!(log.contains("Data not found for CIK 0000000222 (404)"));
    assert!(log.contains("Results successfully saved to"));
}

#[tokio::test]
async fn test_upstream_error_is_recorded_not_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/CIK0000000333.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, &server);
    std::fs::write(config.cik_list_path(), "333\n").unwrap();

    let summary = pipeline::run(&config).await.unwrap();
    assert_eq!(summary.total_records, 0);
    assert_eq!(summary.failed_ciks.len(), 1);

    let log = std::fs::read_to_string(config.log_path()).unwrap();
    assert!(log.contains("Failed to fetch data for CIK 0000000333"));
    assert!(log.contains("503"));
}

#[tokio::test]
async fn test_missing_cik_list_aborts_before_any_fetch() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, &server);

    let err = pipeline::run(&config).await.unwrap_err();
    assert!(matches!(
        err,
        edgarwatch::error::EdgarError::Configuration(_)
    ));
    // No request ever reached the server.
    assert!(server.received_requests().await.unwrap().is_empty());
    // The log was still created and closed cleanly.
    assert!(config.log_path().exists());
}
