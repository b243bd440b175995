//! Weekly cutoff computation and new-filing classification.
//!
//! The cutoff is the most recent Friday at 00:01:00 in US Eastern time,
//! including today when today is Friday. Filing dates carry no timezone,
//! so the comparison is done naive: the cutoff is converted to its local
//! wall-clock representation and compared against filing dates at midnight.

use crate::records::FilingRecord;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use chrono_tz::Tz;

/// Time zone the report operates in.
pub const REPORT_TZ: Tz = chrono_tz::America::New_York;

/// Current wall-clock time in the report time zone.
pub fn now_eastern() -> DateTime<Tz> {
    chrono::Utc::now().with_timezone(&REPORT_TZ)
}

/// Most recent Friday 00:01:00 at or before `now` (today if Friday).
pub fn previous_friday(now: DateTime<Tz>) -> DateTime<Tz> {
    let days_back = (now.weekday().num_days_from_monday() + 7
        - Weekday::Fri.num_days_from_monday())
        % 7;
    let date = now.date_naive() - Duration::days(i64::from(days_back));
    let local = date.and_hms_opt(0, 1, 0).expect("00:01:00 is a valid time");
    now.timezone()
        .from_local_datetime(&local)
        .earliest()
        .expect("00:01 local exists on every US Eastern day")
}

/// Parse an upstream filing date (`YYYY-MM-DD`) to midnight local.
///
/// Unparseable values (including the optional-field placeholder) never
/// classify as new.
fn filing_datetime(date: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Split records into (new since cutoff, all others), order preserved.
pub fn partition_new<'a>(
    records: &'a [FilingRecord],
    cutoff: NaiveDateTime,
) -> (Vec<&'a FilingRecord>, Vec<&'a FilingRecord>) {
    records
        .iter()
        .partition(|r| filing_datetime(&r.filing_date).is_some_and(|dt| dt >= cutoff))
}

/// Count new filings per form type, descending by count.
///
/// Ties keep first-appearance order.
pub fn form_breakdown(new_records: &[&FilingRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in new_records {
        match counts.iter_mut().find(|(form, _)| *form == record.form) {
            Some((_, n)) => *n += 1,
            None => counts.push((record.form.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
