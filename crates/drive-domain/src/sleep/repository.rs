use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::SleepEntry;
use crate::shared::{DomainError, SleepEntryId, UserId};

#[async_trait]
pub trait SleepEntryRepository: Send + Sync {
    async fn save(&self, entry: &SleepEntry) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &SleepEntryId) -> Result<Option<SleepEntry>, DomainError>;

    /// Entries whose start falls in `[from, to]`, ordered by start ascending.
    /// Either bound may be open.
    async fn find_by_user(
        &self,
        user_id: &UserId,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<SleepEntry>, DomainError>;

    /// Most recent entries by start, newest first.
    async fn find_latest(&self, user_id: &UserId, limit: u32) -> Result<Vec<SleepEntry>, DomainError>;

    async fn delete(&self, id: &SleepEntryId) -> Result<(), DomainError>;
}
