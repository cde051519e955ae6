use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::StreakDto;
use drive_domain::completion::{CompletionRecord, COMPLETION_DATE_FORMAT};
use drive_domain::habit::Habit;
use drive_domain::streak::compute_streak_stats;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitDto {
    pub id: String,
    pub name: String,
    pub category: String,
    pub icon: String,
    pub color: String,
    pub muted_light: String,
    pub muted_dark: String,
    pub description: Option<String>,
    pub created_at: String,
    pub completions: Vec<CompletionDto>,
    pub streak: StreakDto,
}

impl HabitDto {
    /// `completions` may include other habits' records; only this habit's are kept.
    pub fn from_habit(habit: &Habit, completions: &[CompletionRecord], today: NaiveDate) -> Self {
        let own: Vec<CompletionRecord> = completions
            .iter()
            .filter(|c| c.habit_id() == habit.id())
            .cloned()
            .collect();
        let color = habit.color();

        Self {
            id: habit.id().to_string(),
            name: habit.name().to_string(),
            category: habit.category().to_string(),
            icon: habit.icon().to_string(),
            color: color.to_string(),
            muted_light: color.muted_light().to_string(),
            muted_dark: color.muted_dark().to_string(),
            description: habit.description().map(str::to_string),
            created_at: habit.created_at().to_rfc3339(),
            streak: compute_streak_stats(&own, today).into(),
            completions: own.iter().map(CompletionDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionDto {
    pub id: String,
    pub habit_id: String,
    pub date: String, // YYYY-MM-DD
    pub completed: bool,
    pub created_at: String,
}

impl From<&CompletionRecord> for CompletionDto {
    fn from(record: &CompletionRecord) -> Self {
        Self {
            id: record.id().to_string(),
            habit_id: record.habit_id().to_string(),
            date: record.date().format(COMPLETION_DATE_FORMAT).to_string(),
            completed: record.completed(),
            created_at: record.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHabitInput {
    pub name: String,
    pub category: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHabitInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    /// Absent leaves the description alone, `null` clears it.
    #[serde(default, deserialize_with = "present_or_null")]
    pub description: Option<Option<String>>,
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompletionInput {
    pub habit_id: String,
    pub date: String,
    #[serde(default = "default_completed")]
    pub completed: bool,
}

fn default_completed() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCompletionInput {
    pub completed: bool,
}
