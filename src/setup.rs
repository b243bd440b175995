//! Working-directory setup and CIK list seeding.
//!
//! `setup` creates the working tree and (re)generates the CIK list from
//! the public company-ticker registry, writing a companion CSV of all
//! registrants. When the registry is unreachable, or its outputs cannot
//! be persisted, the built-in default seed list is written instead.
//!
//! Overwriting an existing list requires confirmation through the injected
//! callback; declining leaves the file untouched.

use crate::cik::Cik;
use crate::config::AppConfig;
use crate::error::{EdgarError, EdgarResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;

/// Seed CIKs used when the registry is unavailable.
pub const DEFAULT_SEED_CIKS: [&str; 7] = [
    "789019", "320193", "1318605", "1288776", "1018724", "1326801", "1045810",
];

/// One registrant in the company-ticker registry document.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryEntry {
    pub cik_str: u64,
    pub ticker: String,
    pub title: String,
}

/// What setup did.
#[derive(Debug, PartialEq, Eq)]
pub enum SetupOutcome {
    /// An existing CIK list was kept; nothing was written.
    Declined,
    /// CIK list and companion CSV regenerated from the registry.
    SeededFromRegistry { ciks: usize, registrants: usize },
    /// Registry path failed; the built-in seed list was written.
    SeededDefaults { ciks: usize, reason: String },
}

/// Create the working tree and seed the CIK list.
///
/// `confirm` is consulted before an existing CIK list is overwritten.
pub async fn run_setup<F>(config: &AppConfig, mut confirm: F) -> EdgarResult<SetupOutcome>
where
    F: FnMut(&str) -> bool,
{
    std::fs::create_dir_all(&config.base_dir).map_err(|e| {
        EdgarError::Persistence(format!(
            "could not create working directory {}: {e}",
            config.base_dir.display()
        ))
    })?;

    let cik_path = config.cik_list_path();
    if cik_path.exists() {
        let prompt = format!(
            "A CIK list already exists at {}. Regenerate it anyway?",
            cik_path.display()
        );
        if !confirm(&prompt) {
            return Ok(SetupOutcome::Declined);
        }
    }

    match fetch_registry(config).await {
        Ok(entries) => match write_registry_outputs(config, &entries) {
            Ok(ciks) => Ok(SetupOutcome::SeededFromRegistry {
                ciks,
                registrants: entries.len(),
            }),
            Err(e) => {
                tracing::warn!("registry outputs failed, falling back to seed list: {e}");
                write_seed_list(&cik_path)?;
                Ok(SetupOutcome::SeededDefaults {
                    ciks: DEFAULT_SEED_CIKS.len(),
                    reason: e.to_string(),
                })
            }
        },
        Err(reason) => {
            tracing::warn!("registry fetch failed, falling back to seed list: {reason}");
            write_seed_list(&cik_path)?;
            Ok(SetupOutcome::SeededDefaults {
                ciks: DEFAULT_SEED_CIKS.len(),
                reason,
            })
        }
    }
}

/// Fetch and sort the company-ticker registry.
///
/// The registry document is a JSON object keyed by arbitrary index; only
/// the entry values matter. Entries come back sorted by title.
async fn fetch_registry(config: &AppConfig) -> Result<Vec<RegistryEntry>, String> {
    let client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .user_agent(&config.user_agent)
        .build()
        .map_err(|e| format!("could not build HTTP client: {e}"))?;

    let resp = client
        .get(&config.registry_url)
        .send()
        .await
        .map_err(|e| format!("registry request failed: {e}"))?;

    if !resp.status().is_success() {
        return Err(format!("registry returned status {}", resp.status().as_u16()));
    }

    let indexed: HashMap<String, RegistryEntry> = resp
        .json()
        .await
        .map_err(|e| format!("invalid registry document: {e}"))?;

    let mut entries: Vec<RegistryEntry> = indexed.into_values().collect();
    entries.sort_by(|a, b| a.title.cmp(&b.title));
    Ok(entries)
}

/// Write the registry CSV and the CIK list. Returns the CIK count.
///
/// The CSV keeps one row per registrant (a company may list multiple
/// tickers); the CIK list carries each CIK once, in CSV order.
fn write_registry_outputs(
    config: &AppConfig,
    entries: &[RegistryEntry],
) -> Result<usize, String> {
    let csv_path = config.registry_csv_path();
    let mut writer = csv::Writer::from_path(&csv_path)
        .map_err(|e| format!("could not create {}: {e}", csv_path.display()))?;

    writer
        .write_record(["CIK", "Company Name", "Ticker"])
        .map_err(|e| format!("could not write registry CSV: {e}"))?;
    for entry in entries {
        let cik = Cik::normalize(&entry.cik_str.to_string());
        writer
            .write_record([cik.as_str(), &entry.title, &entry.ticker])
            .map_err(|e| format!("could not write registry CSV: {e}"))?;
    }
    writer
        .flush()
        .map_err(|e| format!("could not flush registry CSV: {e}"))?;

    let mut seen: HashSet<u64> = HashSet::new();
    let mut lines: Vec<String> = Vec::new();
    for entry in entries {
        if seen.insert(entry.cik_str) {
            lines.push(entry.cik_str.to_string());
        }
    }

    let cik_path = config.cik_list_path();
    std::fs::write(&cik_path, lines.join("\n") + "\n")
        .map_err(|e| format!("could not write {}: {e}", cik_path.display()))?;

    Ok(lines.len())
}

/// Write the built-in seed list.
fn write_seed_list(cik_path: &Path) -> EdgarResult<()> {
    std::fs::write(cik_path, DEFAULT_SEED_CIKS.join("\n") + "\n").map_err(|e| {
        EdgarError::Persistence(format!("could not write {}: {e}", cik_path.display()))
    })
}
