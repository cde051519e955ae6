// In-memory repositories shared by the handler and query tests

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use drive_domain::completion::{CompletionRecord, CompletionRepository};
use drive_domain::habit::{Habit, HabitRepository, HexColor};
use drive_domain::shared::{CompletionId, DomainError, HabitId, SleepEntryId, UserId};
use drive_domain::sleep::{SleepEntry, SleepEntryRepository};

use super::clock::FixedClock;

pub struct MockHabitRepository {
    habits: tokio::sync::RwLock<HashMap<String, Habit>>,
}

impl MockHabitRepository {
    pub fn new() -> Self {
        Self {
            habits: tokio::sync::RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl HabitRepository for MockHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        let mut habits = self.habits.write().await;
        habits.insert(habit.id().as_str().to_string(), habit.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        let habits = self.habits.read().await;
        Ok(habits.get(id.as_str()).cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError> {
        let habits = self.habits.read().await;
        let mut owned: Vec<Habit> = habits
            .values()
            .filter(|h| h.is_owned_by(user_id))
            .cloned()
            .collect();
        owned.sort_by_key(|h| h.created_at());
        Ok(owned)
    }

    async fn delete(&self, id: &HabitId) -> Result<(), DomainError> {
        let mut habits = self.habits.write().await;
        habits
            .remove(id.as_str())
            .map(|_| ())
            .ok_or_else(|| DomainError::HabitNotFound(id.to_string()))
    }
}

pub struct MockCompletionRepository {
    records: tokio::sync::RwLock<HashMap<String, CompletionRecord>>,
}

impl MockCompletionRepository {
    pub fn new() -> Self {
        Self {
            records: tokio::sync::RwLock::new(HashMap::new()),
        }
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait::async_trait]
impl CompletionRepository for MockCompletionRepository {
    async fn save(&self, record: &CompletionRecord) -> Result<CompletionRecord, DomainError> {
        let mut records = self.records.write().await;
        let existing = records
            .values()
            .find(|r| r.habit_id() == record.habit_id() && r.date() == record.date())
            .cloned();

        let stored = match existing {
            Some(old) => CompletionRecord::restore(
                old.id().clone(),
                old.habit_id().clone(),
                old.date(),
                record.completed(),
                old.created_at(),
            ),
            None => record.clone(),
        };
        records.insert(stored.id().as_str().to_string(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &CompletionId) -> Result<Option<CompletionRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(id.as_str()).cloned())
    }

    async fn find_by_habit_and_date(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<Option<CompletionRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .find(|r| r.habit_id() == habit_id && r.date() == date)
            .cloned())
    }

    async fn list_by_habit(&self, habit_id: &HabitId) -> Result<Vec<CompletionRecord>, DomainError> {
        self.list_by_habits(std::slice::from_ref(habit_id)).await
    }

    async fn list_by_habits(
        &self,
        habit_ids: &[HabitId],
    ) -> Result<Vec<CompletionRecord>, DomainError> {
        let records = self.records.read().await;
        let mut found: Vec<CompletionRecord> = records
            .values()
            .filter(|r| habit_ids.contains(r.habit_id()))
            .cloned()
            .collect();
        found.sort_by_key(|r| r.date());
        Ok(found)
    }

    async fn set_completed(&self, id: &CompletionId, completed: bool) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let old = records
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| DomainError::CompletionNotFound(id.to_string()))?;
        let updated = CompletionRecord::restore(
            old.id().clone(),
            old.habit_id().clone(),
            old.date(),
            completed,
            old.created_at(),
        );
        records.insert(id.as_str().to_string(), updated);
        Ok(())
    }

    async fn delete(&self, id: &CompletionId) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records
            .remove(id.as_str())
            .map(|_| ())
            .ok_or_else(|| DomainError::CompletionNotFound(id.to_string()))
    }
}

pub struct MockSleepEntryRepository {
    entries: tokio::sync::RwLock<HashMap<String, SleepEntry>>,
}

impl MockSleepEntryRepository {
    pub fn new() -> Self {
        Self {
            entries: tokio::sync::RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl SleepEntryRepository for MockSleepEntryRepository {
    async fn save(&self, entry: &SleepEntry) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries.insert(entry.id().as_str().to_string(), entry.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SleepEntryId) -> Result<Option<SleepEntry>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.get(id.as_str()).cloned())
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<SleepEntry>, DomainError> {
        let entries = self.entries.read().await;
        let mut found: Vec<SleepEntry> = entries
            .values()
            .filter(|e| e.is_owned_by(user_id))
            .filter(|e| from.map_or(true, |f| e.span().start() >= f))
            .filter(|e| to.map_or(true, |t| e.span().start() <= t))
            .cloned()
            .collect();
        found.sort_by_key(|e| e.span().start());
        Ok(found)
    }

    async fn find_latest(&self, user_id: &UserId, limit: u32) -> Result<Vec<SleepEntry>, DomainError> {
        let mut found = self.find_by_user(user_id, None, None).await?;
        found.reverse();
        found.truncate(limit as usize);
        Ok(found)
    }

    async fn delete(&self, id: &SleepEntryId) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries
            .remove(id.as_str())
            .map(|_| ())
            .ok_or_else(|| DomainError::SleepEntryNotFound(id.to_string()))
    }
}

/// 2025-04-10 12:00 UTC
pub fn noon_clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2025, 4, 10, 12, 0, 0).unwrap())
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn seed_habit(repo: &MockHabitRepository, user: &UserId, name: &str) -> Habit {
    let habit = Habit::new(
        user.clone(),
        name.to_string(),
        "Health".to_string(),
        "run".to_string(),
        HexColor::parse("#3b82f6").unwrap(),
        None,
    )
    .unwrap();
    repo.save(&habit).await.unwrap();
    habit
}
