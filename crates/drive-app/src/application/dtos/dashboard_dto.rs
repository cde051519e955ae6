use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub total_habits: usize,
    /// Habits whose current streak is above zero
    pub active_streaks: usize,
    pub completed_today: usize,
    pub last_sleep_hours: Option<f64>,
    /// Mean over the most recent entries
    pub average_sleep_hours: f64,
    pub sleep_quality: String,
}
