use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use drive_domain::sleep::{DaySleep, HourInterval, SleepChart, SleepEntry, SleepSummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepEntryDto {
    pub id: String,
    pub start_date: String,
    pub end_date: String,
    pub hours: f64,
    /// Weekday of the start, in the user's offset.
    pub day: String,
}

impl SleepEntryDto {
    pub fn from_entry(entry: &SleepEntry, offset: FixedOffset) -> Self {
        let span = entry.span();
        Self {
            id: entry.id().to_string(),
            start_date: span.start().to_rfc3339(),
            end_date: span.end().to_rfc3339(),
            hours: entry.duration_hours(),
            day: span.start().with_timezone(&offset).format("%A").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepSummaryDto {
    pub entry_count: usize,
    pub average_hours: f64,
    pub last_hours: Option<f64>,
    pub quality: String,
}

impl From<SleepSummary> for SleepSummaryDto {
    fn from(summary: SleepSummary) -> Self {
        Self {
            entry_count: summary.entry_count,
            average_hours: summary.average_hours,
            last_hours: summary.last_hours,
            quality: summary.quality.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepListDto {
    pub sleep_entries: Vec<SleepEntryDto>,
    pub summary: SleepSummaryDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSleepEntryInput {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySleepDto {
    pub date: NaiveDate,
    pub intervals: Vec<HourInterval>,
    pub total_sleep: f64,
    pub has_data: bool,
    pub start_time: String,
    pub end_time: String,
}

impl From<DaySleep> for DaySleepDto {
    fn from(day: DaySleep) -> Self {
        Self {
            date: day.date,
            intervals: day.intervals,
            total_sleep: day.total_sleep,
            has_data: day.has_data,
            start_time: day.start_time,
            end_time: day.end_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepChartDto {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub average_sleep: f64,
    pub days: Vec<DaySleepDto>,
}

impl From<SleepChart> for SleepChartDto {
    fn from(chart: SleepChart) -> Self {
        Self {
            from: chart.from,
            to: chart.to,
            average_sleep: chart.average_sleep,
            days: chart.days.into_iter().map(DaySleepDto::from).collect(),
        }
    }
}
