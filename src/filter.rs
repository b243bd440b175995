//! Form-type exclusion filter.
//!
//! Ownership and beneficial-ownership forms (3, 4, 144, 13G) and their
//! amendments are dropped before aggregation, so they never reach the
//! report.

use crate::records::FilingRecord;

/// Form types excluded from the report.
pub const EXCLUDED_FORMS: [&str; 10] = [
    "3", "4", "144", "13G", "3/A", "4/A", "144/A", "13G/A", "SC 13G", "SC 13G/A",
];

/// Whether a form type code is excluded.
pub fn is_excluded(form: &str) -> bool {
    EXCLUDED_FORMS.contains(&form)
}

/// Drop excluded records, preserving order. Pure.
pub fn apply(records: Vec<FilingRecord>) -> Vec<FilingRecord> {
    records.into_iter().filter(|r| !is_excluded(&r.form)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(form: &str, accession: &str) -> FilingRecord {
        FilingRecord {
            company_name: "ACME CORP".into(),
            cik: "0000000001".into(),
            accession_number: accession.into(),
            combined_key: format!("0000000001-{accession}"),
            filing_date: "2024-05-01".into(),
            report_date: "N/A".into(),
            form: form.into(),
            file_number: "N/A".into(),
            primary_document: "doc.htm".into(),
            filing_url: "https://example.test/doc-index.html".into(),
        }
    }

    #[test]
    fn test_every_excluded_form_is_removed() {
        let records: Vec<_> = EXCLUDED_FORMS
            .iter()
            .enumerate()
            .map(|(i, form)| record(form, &format!("acc-{i}")))
            .collect();
        assert!(apply(records).is_empty());
    }

    #[test]
    fn test_kept_forms_pass_in_order() {
        let records = vec![
            record("10-K", "a"),
            record("4", "b"),
            record("8-K", "c"),
            record("SC 13G/A", "d"),
            record("DEF 14A", "e"),
        ];
        let kept = apply(records);
        let forms: Vec<_> = kept.iter().map(|r| r.form.as_str()).collect();
        assert_eq!(forms, vec!["10-K", "8-K", "DEF 14A"]);
    }

    #[test]
    fn test_amendment_variants_do_not_leak_base_matches() {
        // "13G" is excluded, "13G-like" strings that are not exact matches pass.
        assert!(is_excluded("13G"));
        assert!(!is_excluded("13G/B"));
        assert!(!is_excluded("SC 13D"));
    }
}
