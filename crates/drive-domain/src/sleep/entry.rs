use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, SleepEntryId, UserId};

/// One contiguous sleep interval between two absolute instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepSpan {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl SleepSpan {
    /// Rejects spans that do not move forward in time.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, DomainError> {
        if end <= start {
            return Err(DomainError::Validation(
                "Sleep end must be after sleep start".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Rebuild a span from storage without re-validating it.
    pub fn restore(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 3_600_000.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepEntry {
    id: SleepEntryId,
    user_id: UserId,
    span: SleepSpan,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SleepEntry {
    pub fn new(user_id: UserId, span: SleepSpan) -> Self {
        let now = Utc::now();
        Self {
            id: SleepEntryId::new(),
            user_id,
            span,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn restore(
        id: SleepEntryId,
        user_id: UserId,
        span: SleepSpan,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            span,
            created_at,
            updated_at,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    pub fn id(&self) -> &SleepEntryId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn span(&self) -> SleepSpan {
        self.span
    }

    pub fn duration_hours(&self) -> f64 {
        self.span.duration_hours()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
