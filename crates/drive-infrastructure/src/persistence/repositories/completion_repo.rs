use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::persistence::{ResultExt, SqliteRepositoryBase};
use drive_domain::completion::{CompletionRecord, CompletionRepository};
use drive_domain::shared::{CompletionId, DomainError, HabitId};

#[derive(FromRow)]
struct CompletionRow {
    id: String,
    habit_id: String,
    date: NaiveDate,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl CompletionRow {
    fn into_record(self) -> CompletionRecord {
        CompletionRecord::restore(
            CompletionId::from_string(&self.id),
            HabitId::from_string(&self.habit_id),
            self.date,
            self.completed,
            self.created_at,
        )
    }
}

const COMPLETION_COLUMNS: &str = "id, habit_id, date, completed, created_at";

pub struct SqliteCompletionRepository {
    base: SqliteRepositoryBase,
}

impl SqliteCompletionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl CompletionRepository for SqliteCompletionRepository {
    async fn save(&self, record: &CompletionRecord) -> Result<CompletionRecord, DomainError> {
        let query = format!(
            r#"
            INSERT INTO habit_completions (id, habit_id, date, completed, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(habit_id, date) DO UPDATE SET
                completed = excluded.completed
            RETURNING {}
        "#,
            COMPLETION_COLUMNS
        );

        let row: CompletionRow = self
            .base
            .fetch_one(
                sqlx::query_as(&query)
                    .bind(record.id().as_str())
                    .bind(record.habit_id().as_str())
                    .bind(record.date())
                    .bind(record.completed())
                    .bind(record.created_at()),
                "Save completion",
            )
            .await?;

        Ok(row.into_record())
    }

    async fn find_by_id(&self, id: &CompletionId) -> Result<Option<CompletionRecord>, DomainError> {
        let query = format!(
            "SELECT {} FROM habit_completions WHERE id = ?1",
            COMPLETION_COLUMNS
        );

        let row: Option<CompletionRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query).bind(id.as_str()),
                "Find completion by ID",
            )
            .await?;

        Ok(row.map(|r| r.into_record()))
    }

    async fn find_by_habit_and_date(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<Option<CompletionRecord>, DomainError> {
        let query = format!(
            "SELECT {} FROM habit_completions WHERE habit_id = ?1 AND date = ?2",
            COMPLETION_COLUMNS
        );

        let row: Option<CompletionRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query).bind(habit_id.as_str()).bind(date),
                "Find completion by habit and date",
            )
            .await?;

        Ok(row.map(|r| r.into_record()))
    }

    async fn list_by_habit(&self, habit_id: &HabitId) -> Result<Vec<CompletionRecord>, DomainError> {
        let query = format!(
            "SELECT {} FROM habit_completions WHERE habit_id = ?1 ORDER BY date ASC",
            COMPLETION_COLUMNS
        );

        let rows: Vec<CompletionRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(habit_id.as_str()),
                "List completions by habit",
            )
            .await?;

        Ok(rows.into_iter().map(|r| r.into_record()).collect())
    }

    async fn list_by_habits(
        &self,
        habit_ids: &[HabitId],
    ) -> Result<Vec<CompletionRecord>, DomainError> {
        if habit_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {} FROM habit_completions WHERE habit_id IN (",
            COMPLETION_COLUMNS
        ));
        let mut separated = builder.separated(", ");
        for id in habit_ids {
            separated.push_bind(id.as_str());
        }
        separated.push_unseparated(") ORDER BY date ASC");

        let rows: Vec<CompletionRow> = builder
            .build_query_as()
            .fetch_all(self.base.pool())
            .await
            .map_repo_error("List completions by habits")?;

        Ok(rows.into_iter().map(|r| r.into_record()).collect())
    }

    async fn set_completed(&self, id: &CompletionId, completed: bool) -> Result<(), DomainError> {
        let query = "UPDATE habit_completions SET completed = ?2 WHERE id = ?1";

        let result = self
            .base
            .execute(
                sqlx::query(query).bind(id.as_str()).bind(completed),
                "Set completion flag",
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CompletionNotFound(id.to_string()));
        }

        Ok(())
    }

    async fn delete(&self, id: &CompletionId) -> Result<(), DomainError> {
        let query = "DELETE FROM habit_completions WHERE id = ?1";

        let result = self
            .base
            .execute(sqlx::query(query).bind(id.as_str()), "Delete completion")
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CompletionNotFound(id.to_string()));
        }

        Ok(())
    }
}
