//! Date range used by the temperature summary reports

use std::fmt;

/// An inclusive range over the `measurement.date` column
///
/// Bounds are kept as the raw text from the request path. They are compared
/// with the stored `YYYY-MM-DD` strings using text ordering, so a malformed
/// bound narrows or empties the match instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: String,
    end: Option<String>,
}

impl DateRange {
    /// Range from `start` (inclusive) with no upper bound
    #[must_use]
    pub fn starting_at(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: None,
        }
    }

    /// Range from `start` to `end`, both inclusive
    #[must_use]
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: Some(end.into()),
        }
    }

    /// Lower bound
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Upper bound, if any
    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    /// Whether the range is open-ended
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Whether `end` sorts before `start`, which matches nothing
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.end().is_some_and(|end| end < self.start.as_str())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.end {
            Some(end) => write!(f, "{}..={}", self.start, end),
            None => write!(f, "{}..", self.start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(range: &DateRange, date: &str) -> bool {
        date >= range.start() && range.end().is_none_or(|end| date <= end)
    }

    #[test]
    fn open_range_has_no_end() {
        let range = DateRange::starting_at("2017-01-01");
        assert!(range.is_open());
        assert_eq!(range.start(), "2017-01-01");
        assert_eq!(range.end(), None);
    }

    #[test]
    fn closed_range_is_inclusive() {
        let range = DateRange::between("2017-01-01", "2017-01-07");
        assert!(contains(&range, "2017-01-01"));
        assert!(contains(&range, "2017-01-04"));
        assert!(contains(&range, "2017-01-07"));
        assert!(!contains(&range, "2016-12-31"));
        assert!(!contains(&range, "2017-01-08"));
    }

    #[test]
    fn open_range_includes_everything_after_start() {
        let range = DateRange::starting_at("2017-01-01");
        assert!(contains(&range, "2017-01-01"));
        assert!(contains(&range, "2017-08-23"));
        assert!(!contains(&range, "2016-12-31"));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let range = DateRange::between("2017-01-07", "2017-01-01");
        assert!(range.is_inverted());
        assert!(!contains(&range, "2017-01-03"));
        assert!(!contains(&range, "2017-01-01"));
        assert!(!contains(&range, "2017-01-07"));
    }

    #[test]
    fn malformed_bound_compares_as_text() {
        let range = DateRange::starting_at("banana");
        assert!(!contains(&range, "2017-01-01"));
        assert!(!range.is_inverted());
    }

    #[test]
    fn display_formats() {
        assert_eq!(DateRange::starting_at("2017-01-01").to_string(), "2017-01-01..");
        assert_eq!(
            DateRange::between("2017-01-01", "2017-01-07").to_string(),
            "2017-01-01..=2017-01-07"
        );
    }
}
