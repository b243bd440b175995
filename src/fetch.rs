//! Submissions fetcher — one GET per CIK against the EDGAR submissions API.
//!
//! Outcomes are classified per CIK: 200 parses into [`CompanySubmissions`],
//! 404 maps to [`EdgarError::NotFound`], anything else (including transport
//! errors) maps to [`EdgarError::Upstream`]. Per-CIK failures never abort
//! the run.

use crate::cik::Cik;
use crate::config::AppConfig;
use crate::error::{EdgarError, EdgarResult};
use serde::Deserialize;

/// Top-level submissions document for one company.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanySubmissions {
    /// Display name; EDGAR omits it for some shell registrants.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub filings: Filings,
}

impl CompanySubmissions {
    /// Display name with the upstream-absent fallback.
    pub fn company_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown Company")
    }
}

/// The `filings` block of a submissions document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Filings {
    #[serde(default)]
    pub recent: RecentFilings,
}

/// The `filings.recent` block: parallel arrays, one entry per filing.
///
/// Optional arrays (`reportDate`, `fileNumber`) may be absent entirely;
/// every field defaults to empty so a sparse document deserializes cleanly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentFilings {
    #[serde(default)]
    pub accession_number: Vec<String>,
    #[serde(default)]
    pub filing_date: Vec<String>,
    #[serde(default)]
    pub report_date: Vec<String>,
    #[serde(default)]
    pub form: Vec<String>,
    #[serde(default)]
    pub file_number: Vec<String>,
    #[serde(default)]
    pub primary_document: Vec<String>,
}

/// HTTP client for the submissions endpoint.
pub struct SubmissionsClient {
    client: reqwest::Client,
    base_url: String,
}

impl SubmissionsClient {
    /// Build a client with the configured identifying header and timeout.
    pub fn new(config: &AppConfig) -> EdgarResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| EdgarError::Configuration(format!("could not build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.submissions_base.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch and parse the submissions document for one CIK.
    pub async fn fetch(&self, cik: &Cik) -> EdgarResult<CompanySubmissions> {
        let url = format!("{}/CIK{}.json", self.base_url, cik);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| EdgarError::Upstream {
                cik: cik.to_string(),
                detail: e.to_string(),
            })?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(EdgarError::NotFound {
                cik: cik.to_string(),
            });
        }
        if !status.is_success() {
            return Err(EdgarError::Upstream {
                cik: cik.to_string(),
                detail: format!("status code: {}", status.as_u16()),
            });
        }

        resp.json::<CompanySubmissions>()
            .await
            .map_err(|e| EdgarError::Upstream {
                cik: cik.to_string(),
                detail: format!("invalid submissions document: {e}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_document_deserializes_with_defaults() {
        let doc: CompanySubmissions = serde_json::from_str(r#"{"cik": "320193"}"#).unwrap();
        assert_eq!(doc.company_name(), "Unknown Company");
        assert!(doc.filings.recent.accession_number.is_empty());
    }

    #[test]
    fn test_recent_block_parses_parallel_arrays() {
        let json = r#"{
            "name": "MICROSOFT CORP",
            "filings": {
                "recent": {
                    "accessionNumber": ["0001234567-24-000001", "0001234567-24-000002"],
                    "filingDate": ["2024-05-01", "2024-05-02"],
                    "form": ["10-K", "8-K"],
                    "primaryDocument": ["a.htm", "b.htm"]
                }
            }
        }"#;
        let doc: CompanySubmissions = serde_json::from_str(json).unwrap();
        assert_eq!(doc.company_name(), "MICROSOFT CORP");
        assert_eq!(doc.filings.recent.accession_number.len(), 2);
        assert_eq!(doc.filings.recent.form[1], "8-K");
        // Optional arrays absent upstream stay empty.
        assert!(doc.filings.recent.report_date.is_empty());
        assert!(doc.filings.recent.file_number.is_empty());
    }
}
