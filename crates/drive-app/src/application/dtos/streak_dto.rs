use serde::{Deserialize, Serialize};

use super::CompletionDto;
use drive_domain::completion::COMPLETION_DATE_FORMAT;
use drive_domain::habit::HexColor;
use drive_domain::streak::{HeatGrid, StreakStats};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakDto {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completed_days: u32,
    pub last_completed_date: Option<chrono::NaiveDate>,
}

impl From<StreakStats> for StreakDto {
    fn from(stats: StreakStats) -> Self {
        Self {
            current_streak: stats.current_streak,
            longest_streak: stats.longest_streak,
            total_completed_days: stats.total_completed_days,
            last_completed_date: stats.last_completed_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCellDto {
    pub date: String, // YYYY-MM-DD
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatGridDto {
    pub habit_id: String,
    pub rows: usize,
    pub columns: usize,
    pub color: String,
    pub muted_light: String,
    pub muted_dark: String,
    /// Row-major; `null` marks an empty cell.
    pub cells: Vec<Vec<Option<GridCellDto>>>,
}

impl HeatGridDto {
    pub fn new(habit_id: String, color: HexColor, grid: &HeatGrid) -> Self {
        let cells = grid
            .cells()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        cell.as_ref().map(|c| GridCellDto {
                            date: c.date.format(COMPLETION_DATE_FORMAT).to_string(),
                            completed: c.completed,
                        })
                    })
                    .collect()
            })
            .collect();

        Self {
            habit_id,
            rows: grid.rows(),
            columns: grid.columns(),
            color: color.to_string(),
            muted_light: color.muted_light().to_string(),
            muted_dark: color.muted_dark().to_string(),
            cells,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleTodayDto {
    pub habit_id: String,
    pub date: String,
    /// Whether today is now marked complete.
    pub completed: bool,
    pub completion: Option<CompletionDto>,
    pub streak: StreakDto,
}
