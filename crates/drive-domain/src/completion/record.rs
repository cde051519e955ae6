use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{CompletionId, DomainError, HabitId};

/// Wire and storage format of a completion day.
pub const COMPLETION_DATE_FORMAT: &str = "%Y-%m-%d";

/// A habit marked (or explicitly unmarked) on one calendar day of the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRecord {
    id: CompletionId,
    habit_id: HabitId,
    date: NaiveDate,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl CompletionRecord {
    pub fn new(habit_id: HabitId, date: NaiveDate, completed: bool) -> Self {
        Self {
            id: CompletionId::new(),
            habit_id,
            date,
            completed,
            created_at: Utc::now(),
        }
    }

    pub fn restore(
        id: CompletionId,
        habit_id: HabitId,
        date: NaiveDate,
        completed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            habit_id,
            date,
            completed,
            created_at,
        }
    }

    pub fn id(&self) -> &CompletionId {
        &self.id
    }

    pub fn habit_id(&self) -> &HabitId {
        &self.habit_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Parse a `YYYY-MM-DD` day string. A full date-time (RFC 3339, or a naive
/// `T`/space separated one) is accepted too and truncated to the calendar day
/// it was written in.
pub fn parse_completion_date(value: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = value.trim();
    if !has_strict_day_prefix(trimmed) {
        return Err(invalid_date(value));
    }

    if trimmed.len() == 10 {
        return NaiveDate::parse_from_str(trimmed, COMPLETION_DATE_FORMAT)
            .map_err(|_| invalid_date(value));
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| invalid_date(value))
}

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Zero-padded `dddd-dd-dd`; chrono alone would also take `2025-4-6`.
fn has_strict_day_prefix(value: &str) -> bool {
    let Some(day) = value.as_bytes().get(..10) else {
        return false;
    };
    day.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

fn invalid_date(value: &str) -> DomainError {
    DomainError::InvalidInput(format!(
        "Invalid date format, expected YYYY-MM-DD: {}",
        value
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date = parse_completion_date("2025-04-06").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 4, 6).unwrap());
    }

    #[test]
    fn test_parse_datetime_keeps_calendar_day() {
        let morning = parse_completion_date("2025-04-06T07:15:00").unwrap();
        let evening = parse_completion_date("2025-04-06 23:59:59").unwrap();
        assert_eq!(morning, evening);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_completion_date("").is_err());
        assert!(parse_completion_date("yesterday").is_err());
        assert!(parse_completion_date("2025-13-01").is_err());
        assert!(parse_completion_date("2025-04-061").is_err());
        assert!(parse_completion_date("2025-04-06Tgarbage").is_err());
        assert!(parse_completion_date("2025-04-06 xyz").is_err());
        assert!(parse_completion_date("2025-04-06T").is_err());
        assert!(parse_completion_date("2025-4-6").is_err());
        assert!(parse_completion_date("2025-4-06T07:15:00").is_err());
        assert!(parse_completion_date("+2025-04-06").is_err());
    }

    #[test]
    fn test_parse_rfc3339_keeps_written_day() {
        let date = parse_completion_date("2025-04-06T23:30:00-05:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 4, 6).unwrap());

        let fractional = parse_completion_date("2025-04-06T07:15:00.250Z").unwrap();
        assert_eq!(fractional, date);
    }
}
