//! Parsing of date and timestamp strings arriving from the HTTP boundary.
//!
//! Calendar days are `YYYY-MM-DD` in the user's offset. Instants are RFC 3339
//! and are converted to UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

use super::ResultExt;
use drive_domain::completion::parse_completion_date;
use drive_domain::shared::DomainError;

pub fn parse_date_param(name: &str, value: &str) -> Result<NaiveDate, DomainError> {
    parse_completion_date(value.trim())
        .map_err(|_| DomainError::InvalidInput(format!("Invalid {}: {}", name, value)))
}

pub fn parse_instant_param(name: &str, value: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .to_input_err(name)
}

/// Lower bound of a range: an instant as-is, or a bare date at the start of
/// that day in `offset`.
pub fn parse_range_start(
    name: &str,
    value: &str,
    offset: FixedOffset,
) -> Result<DateTime<Utc>, DomainError> {
    parse_bound(name, value, offset, NaiveTime::MIN)
}

/// Upper bound of a range: an instant as-is, or a bare date at the last
/// representable instant of that day in `offset`.
pub fn parse_range_end(
    name: &str,
    value: &str,
    offset: FixedOffset,
) -> Result<DateTime<Utc>, DomainError> {
    parse_bound(name, value, offset, last_instant_of_day())
}

/// `23:59:59.999999999`, the inclusive end of a calendar day. Entries may
/// carry sub-second precision, so a whole-second bound would drop them.
pub fn last_instant_of_day() -> NaiveTime {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN)
}

fn parse_bound(
    name: &str,
    value: &str,
    offset: FixedOffset,
    time: NaiveTime,
) -> Result<DateTime<Utc>, DomainError> {
    let value = value.trim();
    if value.len() == 10 {
        let date = parse_date_param(name, value)?;
        return offset
            .from_local_datetime(&date.and_time(time))
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| DomainError::InvalidInput(format!("Invalid {}: {}", name, value)));
    }
    parse_instant_param(name, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_instant_is_normalized_to_utc() {
        assert_eq!(
            parse_instant_param("startDate", "2025-01-01T23:00:00+02:00").unwrap(),
            utc("2025-01-01T21:00:00Z")
        );
    }

    #[test]
    fn test_bare_dates_expand_to_whole_day() {
        let offset = FixedOffset::east_opt(-5 * 3600).unwrap();

        assert_eq!(
            parse_range_start("startDate", "2025-03-10", offset).unwrap(),
            utc("2025-03-10T05:00:00Z")
        );
        assert_eq!(
            parse_range_end("endDate", "2025-03-10", offset).unwrap(),
            utc("2025-03-11T04:59:59.999999999Z")
        );
    }

    #[test]
    fn test_range_end_covers_last_second_fraction() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let end = parse_range_end("endDate", "2025-04-05", offset).unwrap();

        assert!(utc("2025-04-05T23:59:59.500Z") <= end);
        assert!(utc("2025-04-06T00:00:00Z") > end);
    }

    #[test]
    fn test_garbage_is_invalid_input() {
        let offset = FixedOffset::east_opt(0).unwrap();
        for bad in ["yesterday", "2025-13-01", "2025-01-01T25:00:00Z"] {
            let err = parse_range_start("startDate", bad, offset).unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)), "{bad}");
        }
    }
}
