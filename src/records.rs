//! Filing records and the parallel-array normalizer.

use crate::cik::Cik;
use crate::fetch::RecentFilings;

/// Placeholder for optional fields absent upstream.
pub const PLACEHOLDER: &str = "N/A";

/// One filing by one company, flattened from the submissions document.
///
/// Never mutated after aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingRecord {
    pub company_name: String,
    /// Canonical 10-digit CIK.
    pub cik: String,
    pub accession_number: String,
    /// `{cik}-{accession_number}`; unique only to the extent accession
    /// numbers are unique per CIK.
    pub combined_key: String,
    /// As reported upstream, `YYYY-MM-DD`.
    pub filing_date: String,
    pub report_date: String,
    /// Form type code; non-empty for every persisted record.
    pub form: String,
    pub file_number: String,
    pub primary_document: String,
    /// Public index page for this filing.
    pub filing_url: String,
}

/// Derive the public index URL for a filing.
///
/// Leading zeros are stripped from the CIK and the dashes removed from the
/// accession number in the directory segment; the index filename keeps the
/// dashed accession number.
pub fn filing_index_url(archives_base: &str, cik: &Cik, accession: &str) -> String {
    let compact: String = accession.chars().filter(|c| *c != '-').collect();
    format!(
        "{}/{}/{}/{}-index.html",
        archives_base.trim_end_matches('/'),
        cik.unpadded(),
        compact,
        accession
    )
}

/// Flatten a `filings.recent` block into one record per entry.
///
/// The accession-number array drives the record count; a block without it
/// yields zero records. Optional per-row fields absent upstream are filled
/// with [`PLACEHOLDER`].
pub fn normalize_filings(
    archives_base: &str,
    company_name: &str,
    cik: &Cik,
    recent: &RecentFilings,
) -> Vec<FilingRecord> {
    let field = |values: &[String], i: usize| -> String {
        values.get(i).cloned().unwrap_or_else(|| PLACEHOLDER.to_string())
    };

    recent
        .accession_number
        .iter()
        .enumerate()
        .map(|(i, accession)| {
            let filing_url = filing_index_url(archives_base, cik, accession);
            debug_assert!(url::Url::parse(&filing_url).is_ok());

            FilingRecord {
                company_name: company_name.to_string(),
                cik: cik.to_string(),
                accession_number: accession.clone(),
                combined_key: format!("{cik}-{accession}"),
                filing_date: field(&recent.filing_date, i),
                report_date: field(&recent.report_date, i),
                form: field(&recent.form, i),
                file_number: field(&recent.file_number, i),
                primary_document: field(&recent.primary_document, i),
                filing_url,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recent(n: usize) -> RecentFilings {
        RecentFilings {
            accession_number: (0..n).map(|i| format!("0001234567-24-{i:06}")).collect(),
            filing_date: (0..n).map(|i| format!("2024-05-{:02}", i + 1)).collect(),
            report_date: Vec::new(),
            form: (0..n).map(|_| "10-K".to_string()).collect(),
            file_number: Vec::new(),
            primary_document: (0..n).map(|i| format!("doc{i}.htm")).collect(),
        }
    }

    #[test]
    fn test_normalizer_yields_one_record_per_entry() {
        let cik = Cik::normalize("789019");
        let records = normalize_filings("https://www.sec.gov/Archives/edgar/data", "MSFT", &cik, &recent(5));
        assert_eq!(records.len(), 5);
        // Absent optional arrays fill with the placeholder for every row.
        assert!(records.iter().all(|r| r.report_date == PLACEHOLDER));
        assert!(records.iter().all(|r| r.file_number == PLACEHOLDER));
    }

    #[test]
    fn test_empty_block_yields_zero_records() {
        let cik = Cik::normalize("789019");
        let records = normalize_filings(
            "https://www.sec.gov/Archives/edgar/data",
            "MSFT",
            &cik,
            &RecentFilings::default(),
        );
        assert!(records.is_empty());
    }

    #[test]
    fn test_combined_key_concatenates_cik_and_accession() {
        let cik = Cik::normalize("789019");
        let records = normalize_filings("https://x.test/archives", "MSFT", &cik, &recent(1));
        assert_eq!(records[0].combined_key, "0000789019-0001234567-24-000000");
    }

    #[test]
    fn test_filing_index_url_matches_edgar_layout() {
        let cik = Cik::normalize("0000789019");
        let url = filing_index_url(
            "https://www.sec.gov/Archives/edgar/data",
            &cik,
            "0001234567-24-000001",
        );
        assert_eq!(
            url,
            "https://www.sec.gov/Archives/edgar/data/789019/000123456724000001/0001234567-24-000001-index.html"
        );
        assert!(url::Url::parse(&url).is_ok());
    }
}
