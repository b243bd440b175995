//! One monitoring run, end to end.
//!
//! Load the CIK list, then per CIK: rate-gate, fetch, normalize, filter.
//! Aggregate, persist the report, classify against the weekly cutoff, and
//! summarize. Per-CIK failures are recorded and never abort the run.

use crate::cik::{load_cik_list, Cik};
use crate::config::AppConfig;
use crate::cutoff;
use crate::error::{EdgarError, EdgarResult};
use crate::fetch::SubmissionsClient;
use crate::filter;
use crate::ratelimit::RateGate;
use crate::records::{normalize_filings, FilingRecord};
use crate::report;
use crate::runlog::RunLog;
use chrono::DateTime;
use chrono_tz::Tz;

/// Outcome of one monitoring run.
#[derive(Debug)]
pub struct RunSummary {
    /// Rows persisted to the report.
    pub total_records: usize,
    /// Rows with a filing date at or after the cutoff.
    pub new_count: usize,
    /// Per-form counts of the new subset, descending.
    pub breakdown: Vec<(String, usize)>,
    pub successful_ciks: Vec<Cik>,
    pub failed_ciks: Vec<Cik>,
}

/// Execute one monitoring run against the configured working directory.
///
/// The log file is closed exactly once, even when the run fails partway.
pub async fn run(config: &AppConfig) -> EdgarResult<RunSummary> {
    let mut log = RunLog::create(&config.log_path())?;
    let result = run_inner(config, &mut log).await;
    log.close();
    result
}

async fn run_inner(config: &AppConfig, log: &mut RunLog) -> EdgarResult<RunSummary> {
    print_header(config, log);

    let cik_path = config.cik_list_path();
    let ciks = load_cik_list(&cik_path)?;
    log.line(&format!(
        "Successfully loaded {} CIKs from {}",
        ciks.len(),
        cik_path.display()
    ));

    let client = SubmissionsClient::new(config)?;
    let mut gate = RateGate::new(config.rate);

    let cutoff_ts = cutoff::previous_friday(cutoff::now_eastern());
    log.line(&format!(
        "\nGathering all filings and will report new submissions since {}\n",
        format_cutoff(cutoff_ts)
    ));

    let mut all_records: Vec<FilingRecord> = Vec::new();
    let mut successful_ciks: Vec<Cik> = Vec::new();
    let mut failed_ciks: Vec<Cik> = Vec::new();

    for cik in &ciks {
        gate.wait().await;
        match client.fetch(cik).await {
            Ok(doc) => {
                let records = normalize_filings(
                    &config.archives_base,
                    doc.company_name(),
                    cik,
                    &doc.filings.recent,
                );
                let kept = filter::apply(records);
                tracing::debug!("CIK {cik}: {} filings after filtering", kept.len());
                all_records.extend(kept);
                successful_ciks.push(cik.clone());
            }
            Err(err @ (EdgarError::NotFound { .. } | EdgarError::Upstream { .. })) => {
                log.line(&err.to_string());
                failed_ciks.push(cik.clone());
            }
            Err(err) => return Err(err),
        }
    }

    let report_path = config.report_path();
    report::write_report(&report_path, &all_records)?;
    log.line(&format!(
        "\nResults successfully saved to {}",
        report_path.display()
    ));

    let (new_records, _rest) = cutoff::partition_new(&all_records, cutoff_ts.naive_local());
    let breakdown = cutoff::form_breakdown(&new_records);

    log.line(&format!(
        "\nAnalyzing new filings since {}:",
        format_cutoff(cutoff_ts)
    ));
    log.line(&format!("Number of new filings: {}", new_records.len()));

    if !new_records.is_empty() {
        log.line("\nBreakdown of new filings by form type:");
        for (form, count) in &breakdown {
            log.line(&format!("{form}: {count} filings"));
        }
    }

    if !successful_ciks.is_empty() {
        log.line(&format!(
            "\nData was successfully retrieved for {} CIKs",
            successful_ciks.len()
        ));
    }
    if !failed_ciks.is_empty() {
        let listing: Vec<&str> = failed_ciks.iter().map(Cik::as_str).collect();
        log.line(&format!(
            "\nThe following CIKs returned no data (404 or other errors): {}",
            listing.join(", ")
        ));
    }

    Ok(RunSummary {
        total_records: all_records.len(),
        new_count: new_records.len(),
        breakdown,
        successful_ciks,
        failed_ciks,
    })
}

fn format_cutoff(cutoff_ts: DateTime<Tz>) -> String {
    cutoff_ts.format("%Y-%m-%d %H:%M:%S %Z").to_string()
}

fn print_header(config: &AppConfig, log: &mut RunLog) {
    let rule = "=".repeat(72);
    log.line(&rule);
    log.line("SEC Filing Monitor");
    log.line(&rule);
    log.line(&format!(
        "Pulls recent EDGAR filings for every company listed in {},",
        config.cik_list_path().display()
    ));
    log.line("filters out ownership forms (3, 4, 144, 13G and their amendments),");
    log.line("and reports submissions filed since the previous Friday.");
    log.line(&rule);
}
