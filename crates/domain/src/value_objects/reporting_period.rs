//! Fixed reporting period of the dataset
//!
//! The dataset ends on 2017-08-23. "Last year" reports are anchored on that
//! date rather than on the wall clock, so responses never drift with time.

use chrono::{Duration, NaiveDate};

/// Last observation date in the dataset
pub const REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2017, 8, 23) {
    Some(date) => date,
    None => unreachable!(),
};

/// Length of the "last year" window in days
pub const LOOKBACK_DAYS: i64 = 365;

/// First date of the "last year" window (2016-08-23)
#[must_use]
pub fn one_year_before_reference() -> NaiveDate {
    REFERENCE_DATE - Duration::days(LOOKBACK_DAYS)
}

/// First date of the "last year" window, formatted as stored in the
/// `measurement.date` column (`YYYY-MM-DD`)
#[must_use]
pub fn lookback_start() -> String {
    one_year_before_reference().format("%Y-%m-%d").to_string()
}
