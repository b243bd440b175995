//! Working-directory teardown.
//!
//! Deletes the working tree and everything in it, after confirmation
//! through the injected callback.

use crate::config::AppConfig;
use crate::error::{EdgarError, EdgarResult};

/// What teardown did.
#[derive(Debug, PartialEq, Eq)]
pub enum TeardownOutcome {
    /// Nothing to delete.
    Missing,
    /// Operator declined; the tree is untouched.
    Declined,
    Deleted,
}

/// Recursively delete the working directory after confirmation.
pub fn run_teardown<F>(config: &AppConfig, mut confirm: F) -> EdgarResult<TeardownOutcome>
where
    F: FnMut(&str) -> bool,
{
    if !config.base_dir.exists() {
        return Ok(TeardownOutcome::Missing);
    }

    let prompt = format!(
        "This will permanently delete {} and all contents. Are you sure you want to proceed?",
        config.base_dir.display()
    );
    if !confirm(&prompt) {
        return Ok(TeardownOutcome::Declined);
    }

    std::fs::remove_dir_all(&config.base_dir).map_err(|e| {
        EdgarError::Persistence(format!(
            "could not delete {}: {e}",
            config.base_dir.display()
        ))
    })?;
    Ok(TeardownOutcome::Deleted)
}
