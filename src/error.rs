//! Error taxonomy for the monitoring pipeline.
//!
//! Per-CIK failures (`NotFound`, `Upstream`) are recorded and the run
//! continues; `Configuration` aborts before any network activity.

/// Errors that can occur while monitoring EDGAR filings.
#[derive(thiserror::Error, Debug)]
pub enum EdgarError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Data not found for CIK {cik} (404)")]
    NotFound { cik: String },

    #[error("Failed to fetch data for CIK {cik}: {detail}")]
    Upstream { cik: String, detail: String },

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EdgarError {
    /// Whether this error aborts the whole run (as opposed to one CIK).
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::Persistence(_) | Self::Io(_)
        )
    }
}

/// Convenience result type.
pub type EdgarResult<T> = Result<T, EdgarError>;
