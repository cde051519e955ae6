use async_trait::async_trait;
use chrono::NaiveDate;

use super::CompletionRecord;
use crate::shared::{CompletionId, DomainError, HabitId};

#[async_trait]
pub trait CompletionRepository: Send + Sync {
    /// Upsert keyed on `(habit_id, date)`; an existing record for the same
    /// day keeps its id and takes the new `completed` flag.
    async fn save(&self, record: &CompletionRecord) -> Result<CompletionRecord, DomainError>;

    async fn find_by_id(&self, id: &CompletionId) -> Result<Option<CompletionRecord>, DomainError>;

    async fn find_by_habit_and_date(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<Option<CompletionRecord>, DomainError>;

    /// Completions for one habit ordered by date ascending.
    async fn list_by_habit(&self, habit_id: &HabitId) -> Result<Vec<CompletionRecord>, DomainError>;

    /// Completions for many habits in one round trip, ordered by date ascending.
    async fn list_by_habits(
        &self,
        habit_ids: &[HabitId],
    ) -> Result<Vec<CompletionRecord>, DomainError>;

    async fn set_completed(&self, id: &CompletionId, completed: bool) -> Result<(), DomainError>;

    async fn delete(&self, id: &CompletionId) -> Result<(), DomainError>;
}
