use std::collections::BTreeMap;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::aggregator::{aggregate, HourInterval};
use super::SleepSpan;
use crate::shared::DomainError;

/// Placeholder shown when a day has no sleep.
pub const NO_TIME: &str = "N/A";

/// Upper bound on the number of days a single chart may cover.
pub const MAX_CHART_DAYS: i64 = 366 * 2;

/// One column of the sleep chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySleep {
    pub date: NaiveDate,
    pub intervals: Vec<HourInterval>,
    pub total_sleep: f64,
    pub has_data: bool,
    pub start_time: String,
    pub end_time: String,
}

impl DaySleep {
    pub fn from_intervals(date: NaiveDate, intervals: Vec<HourInterval>) -> Self {
        let total_sleep = intervals.iter().fold(0.0, |acc, i| acc + i.width());
        let (start_time, end_time) = match intervals.first() {
            Some(first) => (format_decimal_hour(first.start), format_decimal_hour(first.end)),
            None => (NO_TIME.to_string(), NO_TIME.to_string()),
        };

        Self {
            date,
            has_data: !intervals.is_empty(),
            intervals,
            total_sleep,
            start_time,
            end_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepChart {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub days: Vec<DaySleep>,
    /// Mean total sleep over the days that have any sleep at all.
    pub average_sleep: f64,
}

/// Chart every day in `[from, to]`, including days without sleep.
pub fn build_sleep_chart<'a, I>(
    spans: I,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<SleepChart, DomainError>
where
    I: IntoIterator<Item = &'a SleepSpan>,
{
    if from > to {
        return Err(DomainError::Validation(format!(
            "Chart range start {} is after end {}",
            from, to
        )));
    }
    if (to - from).num_days() >= MAX_CHART_DAYS {
        return Err(DomainError::Validation(format!(
            "Chart range cannot exceed {} days",
            MAX_CHART_DAYS
        )));
    }

    let mut by_day: BTreeMap<NaiveDate, Vec<HourInterval>> = aggregate(spans);

    let days: Vec<DaySleep> = from
        .iter_days()
        .take_while(|d| *d <= to)
        .map(|d| DaySleep::from_intervals(d, by_day.remove(&d).unwrap_or_default()))
        .collect();

    let with_data: Vec<f64> = days
        .iter()
        .filter(|d| d.has_data)
        .map(|d| d.total_sleep)
        .collect();
    let average_sleep = if with_data.is_empty() {
        0.0
    } else {
        with_data.iter().sum::<f64>() / with_data.len() as f64
    };

    Ok(SleepChart {
        from,
        to,
        days,
        average_sleep,
    })
}

/// First day of the previous month through the last day of `today`'s month.
pub fn default_chart_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let month_start = today.with_day(1).unwrap_or(today);
    let from = month_start
        .checked_sub_months(Months::new(1))
        .unwrap_or(month_start);
    let to = month_start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .unwrap_or(today);
    (from, to)
}

/// `13.5 -> "1:30 PM"`. Both `0.0` and `24.0` render as midnight.
pub fn format_decimal_hour(hour: f64) -> String {
    let mut hours = hour.floor() as i64;
    let mut minutes = ((hour - hour.floor()) * 60.0).round() as i64;
    if minutes == 60 {
        hours += 1;
        minutes = 0;
    }

    let hours = hours.rem_euclid(24);
    let period = if hours >= 12 { "PM" } else { "AM" };
    let display = if hours % 12 == 0 { 12 } else { hours % 12 };
    format!("{}:{:02} {}", display, minutes, period)
}
