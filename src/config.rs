//! Runtime configuration.
//!
//! One immutable [`AppConfig`] is built in the CLI layer and passed by
//! reference into every component. There are no process-wide singletons.

use std::path::PathBuf;
use std::time::Duration;

/// EDGAR asks for a contact-bearing identifying header on every request.
/// Operators should override this with their own contact address.
pub const DEFAULT_USER_AGENT: &str =
    concat!("edgarwatch/", env!("CARGO_PKG_VERSION"), " (contact: ops@edgarwatch.dev)");

/// Base URL for per-CIK submissions documents.
pub const DEFAULT_SUBMISSIONS_BASE: &str = "https://data.sec.gov/submissions";

/// Base URL for filing index pages in the EDGAR archive.
pub const DEFAULT_ARCHIVES_BASE: &str = "https://www.sec.gov/Archives/edgar/data";

/// Public company-ticker registry used by `edgarwatch setup`.
pub const DEFAULT_REGISTRY_URL: &str = "https://www.sec.gov/files/company_tickers.json";

/// Minimum spacing between outbound requests.
#[derive(Debug, Clone, Copy)]
pub struct RatePolicy {
    /// Minimum interval between the start of consecutive requests.
    pub min_interval: Duration,
    /// Upper bound of the random jitter added to each wait.
    pub jitter: Duration,
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self {
            min_interval: Duration::from_millis(500),
            jitter: Duration::from_millis(150),
        }
    }
}

/// Immutable configuration for one invocation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Working directory holding the CIK list and all outputs.
    pub base_dir: PathBuf,
    /// Identifying `User-Agent` sent on every request.
    pub user_agent: String,
    /// Base URL for submissions documents (overridden in tests).
    pub submissions_base: String,
    /// Base URL for derived filing index URLs.
    pub archives_base: String,
    /// Company-ticker registry endpoint.
    pub registry_url: String,
    /// Per-request timeout.
    pub http_timeout: Duration,
    /// Outbound request spacing.
    pub rate: RatePolicy,
}

impl AppConfig {
    /// Build a config rooted at the given working directory.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            submissions_base: DEFAULT_SUBMISSIONS_BASE.to_string(),
            archives_base: DEFAULT_ARCHIVES_BASE.to_string(),
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            http_timeout: Duration::from_secs(30),
            rate: RatePolicy::default(),
        }
    }

    /// Default working directory: `~/.edgarwatch`.
    pub fn default_base_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".edgarwatch")
    }

    /// Path of the newline-delimited CIK list.
    pub fn cik_list_path(&self) -> PathBuf {
        self.base_dir.join("cik_list.txt")
    }

    /// Path of the spreadsheet report, overwritten each run.
    pub fn report_path(&self) -> PathBuf {
        self.base_dir.join("filings_report.xlsx")
    }

    /// Path of the run log, overwritten each run.
    pub fn log_path(&self) -> PathBuf {
        self.base_dir.join("run.log")
    }

    /// Path of the companion registry table written by setup.
    pub fn registry_csv_path(&self) -> PathBuf {
        self.base_dir.join("company_registry.csv")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base_dir(Self::default_base_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_rooted_at_base_dir() {
        let cfg = AppConfig::with_base_dir(PathBuf::from("/tmp/ew"));
        assert_eq!(cfg.cik_list_path(), PathBuf::from("/tmp/ew/cik_list.txt"));
        assert_eq!(cfg.report_path(), PathBuf::from("/tmp/ew/filings_report.xlsx"));
        assert_eq!(cfg.log_path(), PathBuf::from("/tmp/ew/run.log"));
        assert_eq!(
            cfg.registry_csv_path(),
            PathBuf::from("/tmp/ew/company_registry.csv")
        );
    }

    #[test]
    fn test_user_agent_carries_contact() {
        assert!(DEFAULT_USER_AGENT.contains("contact:"));
    }
}
