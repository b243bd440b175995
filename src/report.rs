//! Spreadsheet report writer.
//!
//! The full aggregated dataset goes into one worksheet, one row per
//! record, overwriting any previous report at the same path.

use crate::error::{EdgarError, EdgarResult};
use crate::records::FilingRecord;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Report columns, in order.
pub const COLUMNS: [&str; 10] = [
    "Company Name",
    "CIK",
    "Accession Number",
    "Combined File Number",
    "Filing Date",
    "Report Date",
    "Form",
    "SEC File Number",
    "Primary Document",
    "Filing URL",
];

fn row_values(record: &FilingRecord) -> [&str; 10] {
    [
        &record.company_name,
        &record.cik,
        &record.accession_number,
        &record.combined_key,
        &record.filing_date,
        &record.report_date,
        &record.form,
        &record.file_number,
        &record.primary_document,
        &record.filing_url,
    ]
}

/// Write the report workbook, creating parent directories as needed.
pub fn write_report(path: &Path, records: &[FilingRecord]) -> EdgarResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let persist = |e: rust_xlsxwriter::XlsxError| {
        EdgarError::Persistence(format!("could not write report to {}: {e}", path.display()))
    };

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).map_err(persist)?;
    }
    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, value) in row_values(record).iter().enumerate() {
            sheet.write_string(row, col as u16, *value).map_err(persist)?;
        }
    }

    workbook.save(path).map_err(persist)?;
    tracing::debug!("wrote {} report rows to {}", records.len(), path.display());
    Ok(())
}
