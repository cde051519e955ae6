use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use drive_domain::habit::{Habit, HabitRepository, HexColor};
use drive_domain::shared::{DomainError, HabitId, UserId};

#[derive(FromRow)]
struct HabitRow {
    id: String,
    user_id: String,
    name: String,
    category: String,
    icon: String,
    color: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl HabitRow {
    fn try_into_habit(self) -> Result<Habit, DomainError> {
        let color = HexColor::parse(&self.color).map_err(|e| {
            DomainError::DataIntegrity(format!(
                "Stored color for habit {} is invalid: {}",
                self.id, e
            ))
        })?;

        Ok(Habit::restore(
            HabitId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            self.name,
            self.category,
            self.icon,
            color,
            self.description,
            self.created_at,
        ))
    }
}

const HABIT_COLUMNS: &str =
    "id, user_id, name, category, icon, color, description, created_at";

pub struct SqliteHabitRepository {
    base: SqliteRepositoryBase,
}

impl SqliteHabitRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl HabitRepository for SqliteHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO habits (id, user_id, name, category, icon, color, description, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(id) DO UPDATE SET
                name = ?3,
                category = ?4,
                icon = ?5,
                color = ?6,
                description = ?7
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(habit.id().as_str())
                    .bind(habit.user_id().as_str())
                    .bind(habit.name())
                    .bind(habit.category())
                    .bind(habit.icon())
                    .bind(habit.color().to_string())
                    .bind(habit.description())
                    .bind(habit.created_at()),
                "Save habit",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        let query = format!("SELECT {} FROM habits WHERE id = ?1", HABIT_COLUMNS);

        let row: Option<HabitRow> = self
            .base
            .fetch_optional(sqlx::query_as(&query).bind(id.as_str()), "Find habit by ID")
            .await?;

        row.map(HabitRow::try_into_habit).transpose()
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError> {
        let query = format!(
            "SELECT {} FROM habits WHERE user_id = ?1 ORDER BY created_at ASC, id ASC",
            HABIT_COLUMNS
        );

        let rows: Vec<HabitRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(user_id.as_str()),
                "Find habits by user",
            )
            .await?;

        rows.into_iter().map(HabitRow::try_into_habit).collect()
    }

    async fn delete(&self, id: &HabitId) -> Result<(), DomainError> {
        let query = "DELETE FROM habits WHERE id = ?1";

        let result = self
            .base
            .execute(sqlx::query(query).bind(id.as_str()), "Delete habit")
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::HabitNotFound(id.to_string()));
        }

        Ok(())
    }
}
