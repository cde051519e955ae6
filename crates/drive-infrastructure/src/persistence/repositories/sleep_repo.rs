use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use drive_domain::shared::{DomainError, SleepEntryId, UserId};
use drive_domain::sleep::{SleepEntry, SleepEntryRepository, SleepSpan};

#[derive(FromRow)]
struct SleepEntryRow {
    id: String,
    user_id: String,
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SleepEntryRow {
    fn into_entry(self) -> SleepEntry {
        SleepEntry::restore(
            SleepEntryId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            SleepSpan::restore(self.start_at, self.end_at),
            self.created_at,
            self.updated_at,
        )
    }
}

const SLEEP_COLUMNS: &str = "id, user_id, start_at, end_at, created_at, updated_at";

pub struct SqliteSleepEntryRepository {
    base: SqliteRepositoryBase,
}

impl SqliteSleepEntryRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl SleepEntryRepository for SqliteSleepEntryRepository {
    async fn save(&self, entry: &SleepEntry) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO sleep_entries (id, user_id, start_at, end_at, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                start_at = ?3,
                end_at = ?4,
                updated_at = ?6
        "#;

        let span = entry.span();
        self.base
            .execute(
                sqlx::query(query)
                    .bind(entry.id().as_str())
                    .bind(entry.user_id().as_str())
                    .bind(span.start())
                    .bind(span.end())
                    .bind(entry.created_at())
                    .bind(entry.updated_at()),
                "Save sleep entry",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &SleepEntryId) -> Result<Option<SleepEntry>, DomainError> {
        let query = format!("SELECT {} FROM sleep_entries WHERE id = ?1", SLEEP_COLUMNS);

        let row: Option<SleepEntryRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query).bind(id.as_str()),
                "Find sleep entry by ID",
            )
            .await?;

        Ok(row.map(|r| r.into_entry()))
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<SleepEntry>, DomainError> {
        // Timestamps are stored as RFC 3339 text in UTC, so text order is time order
        let query = format!(
            r#"
            SELECT {} FROM sleep_entries
            WHERE user_id = ?1
              AND (?2 IS NULL OR start_at >= ?2)
              AND (?3 IS NULL OR start_at <= ?3)
            ORDER BY start_at ASC
        "#,
            SLEEP_COLUMNS
        );

        let rows: Vec<SleepEntryRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(user_id.as_str())
                    .bind(from)
                    .bind(to),
                "Find sleep entries by user",
            )
            .await?;

        Ok(rows.into_iter().map(|r| r.into_entry()).collect())
    }

    async fn find_latest(&self, user_id: &UserId, limit: u32) -> Result<Vec<SleepEntry>, DomainError> {
        let query = format!(
            "SELECT {} FROM sleep_entries WHERE user_id = ?1 ORDER BY start_at DESC LIMIT ?2",
            SLEEP_COLUMNS
        );

        let rows: Vec<SleepEntryRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(user_id.as_str()).bind(limit),
                "Find latest sleep entries",
            )
            .await?;

        Ok(rows.into_iter().map(|r| r.into_entry()).collect())
    }

    async fn delete(&self, id: &SleepEntryId) -> Result<(), DomainError> {
        let query = "DELETE FROM sleep_entries WHERE id = ?1";

        let result = self
            .base
            .execute(sqlx::query(query).bind(id.as_str()), "Delete sleep entry")
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SleepEntryNotFound(id.to_string()));
        }

        Ok(())
    }
}
