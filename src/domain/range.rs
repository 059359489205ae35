//! Sample-collection date ranges
//!
//! A [`DateRange`] is what the user has picked so far; either bound may be
//! missing. [`DateRange::validate`] turns a complete range into a
//! [`ValidRange`], the only form a fetch can be issued for.

use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum span between the start and end of a range, in days (inclusive)
pub const MAX_RANGE_DAYS: i64 = 7;

/// Reasons a selected range is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// End bound precedes the start bound
    #[error("Range end {end} is before range start {start}")]
    EndBeforeStart {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Span exceeds [`MAX_RANGE_DAYS`]
    #[error("Range spans {span_seconds} seconds; the maximum is {max_days} days")]
    SpanTooLong { span_seconds: i64, max_days: i64 },

    /// End bound lies after the current instant
    #[error("Range end {end} is later than the current time {now}")]
    EndInFuture {
        end: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    /// A bound could not be parsed
    #[error("Invalid date '{0}': expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate(String),
}

/// A possibly incomplete date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Range with both bounds set
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Range with no bounds selected
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses both bounds from user input
    ///
    /// See [`parse_bound`] for the accepted formats.
    pub fn parse(start: &str, end: &str) -> Result<Self, RangeError> {
        Ok(Self::new(parse_bound(start)?, parse_bound(end)?))
    }

    /// True when both bounds are set
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Validates the range against the current instant
    ///
    /// Returns `Ok(None)` for an incomplete range: it is acceptable as a
    /// selection but nothing can be fetched for it yet.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<Option<ValidRange>, RangeError> {
        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) => (start, end),
            _ => return Ok(None),
        };

        if end < start {
            return Err(RangeError::EndBeforeStart { start, end });
        }

        let span = end - start;
        if span > Duration::days(MAX_RANGE_DAYS) {
            return Err(RangeError::SpanTooLong {
                span_seconds: span.num_seconds(),
                max_days: MAX_RANGE_DAYS,
            });
        }

        if end > now {
            return Err(RangeError::EndInFuture { end, now });
        }

        Ok(Some(ValidRange { start, end }))
    }
}

/// A complete range that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl ValidRange {
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Start bound as an ISO-8601 UTC timestamp with millisecond precision
    pub fn start_iso(&self) -> String {
        to_iso(self.start)
    }

    /// End bound as an ISO-8601 UTC timestamp with millisecond precision
    pub fn end_iso(&self) -> String {
        to_iso(self.end)
    }

    /// Back to a plain selection
    pub fn as_range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}

impl fmt::Display for ValidRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start_iso(), self.end_iso())
    }
}

/// `2023-01-01T00:00:00.000Z`
fn to_iso(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a range bound
///
/// Accepts a calendar date (`2023-01-01`, read as midnight UTC) or a full
/// RFC 3339 timestamp (`2023-01-01T12:30:00Z`, `2023-01-01T08:30:00-04:00`).
pub fn parse_bound(input: &str) -> Result<DateTime<Utc>, RangeError> {
    let trimmed = input.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| RangeError::InvalidDate(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn now() -> DateTime<Utc> {
        at(2024, 6, 1, 0, 0, 0)
    }

    #[test]
    fn test_incomplete_range_is_not_fetchable() {
        let range = DateRange {
            start: Some(at(2023, 1, 1, 0, 0, 0)),
            end: None,
        };
        assert!(!range.is_complete());
        assert_eq!(range.validate(now()).unwrap(), None);
        assert_eq!(DateRange::empty().validate(now()).unwrap(), None);
    }

    #[test]
    fn test_exactly_seven_days_is_accepted() {
        let range = DateRange::new(at(2023, 1, 1, 0, 0, 0), at(2023, 1, 8, 0, 0, 0));
        let valid = range.validate(now()).unwrap().unwrap();
        assert_eq!(valid.as_range(), range);
    }

    #[test]
    fn test_seven_days_and_one_second_is_rejected() {
        let range = DateRange::new(at(2023, 1, 1, 0, 0, 0), at(2023, 1, 8, 0, 0, 1));
        let err = range.validate(now()).unwrap_err();
        assert_eq!(
            err,
            RangeError::SpanTooLong {
                span_seconds: 7 * 86_400 + 1,
                max_days: 7
            }
        );
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let range = DateRange::new(at(2023, 1, 5, 0, 0, 0), at(2023, 1, 1, 0, 0, 0));
        assert!(matches!(
            range.validate(now()),
            Err(RangeError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn test_single_instant_range_is_accepted() {
        let instant = at(2023, 1, 5, 0, 0, 0);
        assert!(DateRange::new(instant, instant)
            .validate(now())
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_end_in_future_is_rejected() {
        let range = DateRange::new(at(2024, 5, 30, 0, 0, 0), at(2024, 6, 2, 0, 0, 0));
        assert!(matches!(
            range.validate(now()),
            Err(RangeError::EndInFuture { .. })
        ));
    }

    #[test]
    fn test_iso_formatting_uses_millis_and_z() {
        let range = DateRange::new(at(2023, 1, 1, 0, 0, 0), at(2023, 1, 7, 23, 59, 59));
        let valid = range.validate(now()).unwrap().unwrap();
        assert_eq!(valid.start_iso(), "2023-01-01T00:00:00.000Z");
        assert_eq!(valid.end_iso(), "2023-01-07T23:59:59.000Z");
    }

    #[test]
    fn test_parse_bound_formats() {
        assert_eq!(parse_bound("2023-01-01").unwrap(), at(2023, 1, 1, 0, 0, 0));
        assert_eq!(
            parse_bound("2023-01-01T12:30:00Z").unwrap(),
            at(2023, 1, 1, 12, 30, 0)
        );
        assert_eq!(
            parse_bound("2023-01-01T08:30:00-04:00").unwrap(),
            at(2023, 1, 1, 12, 30, 0)
        );
        assert!(matches!(
            parse_bound("01/02/2023"),
            Err(RangeError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_parse_range() {
        let range = DateRange::parse("2023-01-01", "2023-01-03").unwrap();
        assert!(range.is_complete());
    }
}
