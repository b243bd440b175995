//! `edgarwatch run` — execute one monitoring run.

use crate::config::AppConfig;
use crate::pipeline;
use anyhow::{Context, Result};

/// Run the pipeline against the configured working directory.
pub async fn run(config: &AppConfig) -> Result<()> {
    let summary = pipeline::run(config)
        .await
        .context("monitoring run failed")?;

    tracing::info!(
        "run complete: {} records, {} new, {} failed CIKs",
        summary.total_records,
        summary.new_count,
        summary.failed_ciks.len()
    );
    Ok(())
}
