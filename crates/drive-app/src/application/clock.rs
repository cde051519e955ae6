use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

use drive_domain::shared::DomainError;

/// Source of "now" and of the user's calendar day.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn offset(&self) -> FixedOffset;

    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&self.offset()).date_naive()
    }
}

/// Wall clock read in a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn with_offset_minutes(minutes: i32) -> Result<Self, DomainError> {
        Ok(Self {
            offset: offset_from_minutes(minutes)?,
        })
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn offset(&self) -> FixedOffset {
        self.offset
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            offset: Utc.fix(),
        }
    }

    pub fn with_offset_minutes(mut self, minutes: i32) -> Result<Self, DomainError> {
        self.offset = offset_from_minutes(minutes)?;
        Ok(self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn offset(&self) -> FixedOffset {
        self.offset
    }
}

fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, DomainError> {
    FixedOffset::east_opt(minutes * 60)
        .ok_or_else(|| DomainError::Validation(format!("Invalid UTC offset: {} minutes", minutes)))
}
