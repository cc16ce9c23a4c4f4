/// Calendar utilities for the local-calendar date model
///
/// All habit bookkeeping happens in the host's local calendar: a completion
/// belongs to the civil day the user saw, not a UTC day. Dates are carried as
/// `NaiveDate` values; the canonical wire form is the zero-padded
/// `YYYY-MM-DD` string, for which lexicographic order equals chronological
/// order.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

use crate::domain::DomainError;

/// Format a date in the canonical `YYYY-MM-DD` form
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a canonical `YYYY-MM-DD` string back into a date
///
/// Strict inverse of [`format_date`]: anything that is not a valid
/// zero-padded calendar date is rejected.
pub fn parse_canonical(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(s.to_string()))
}

/// Whether two instants fall on the same local calendar day
pub fn is_same_day(a: DateTime<Local>, b: DateTime<Local>) -> bool {
    a.date_naive() == b.date_naive()
}

/// The current local calendar day
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The last `n` calendar days ending at `end`, ascending
///
/// `end` is the last element; each step is one calendar day, so the window is
/// unaffected by daylight-saving transitions.
pub fn last_n_days_ending(end: NaiveDate, n: u32) -> Vec<NaiveDate> {
    (0..n)
        .rev()
        .map(|offset| end - Duration::days(offset as i64))
        .collect()
}

/// The last `n` calendar days ending today, ascending
pub fn last_n_days(n: u32) -> Vec<NaiveDate> {
    last_n_days_ending(today(), n)
}

/// Number of days in the zero-indexed `month` of `year`
///
/// Month 0 is January, month 11 is December, matching the calendar-grid
/// consumers of this function.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!(month < 12, "month is zero-indexed");
    let (next_year, next_month) = if month >= 11 {
        (year + 1, 1)
    } else {
        (year, month + 2)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}
