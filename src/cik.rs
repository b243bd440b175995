//! CIK identifiers and the CIK list loader.

use crate::error::{EdgarError, EdgarResult};
use std::fmt;
use std::path::Path;

/// A CIK, canonicalized to a 10-character zero-padded decimal string.
///
/// Normalization pads short identifiers and never truncates long ones.
/// The loader does not enforce uniqueness; duplicates pass through.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cik(String);

impl Cik {
    /// Normalize a raw token into a canonical CIK.
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim();
        Self(format!("{trimmed:0>10}"))
    }

    /// The canonical zero-padded form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The CIK with leading zeros stripped, as used in archive URLs.
    pub fn unpadded(&self) -> &str {
        let stripped = self.0.trim_start_matches('0');
        if stripped.is_empty() { "0" } else { stripped }
    }
}

impl fmt::Display for Cik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Load the newline-delimited CIK list.
///
/// Blank lines are skipped and surrounding whitespace is trimmed; order and
/// duplicates are preserved. A missing or unreadable file is fatal.
pub fn load_cik_list(path: &Path) -> EdgarResult<Vec<Cik>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        EdgarError::Configuration(format!("could not read CIK list at {}: {e}", path.display()))
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Cik::normalize)
        .collect())
}
