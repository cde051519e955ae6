//! Splits sleep spans into per-day decimal-hour intervals and merges them.
//!
//! All day boundaries are taken in UTC, for both the split and the regrouping,
//! so a span never lands on a neighbouring day because of a zone switch.

use std::collections::BTreeMap;

use chrono::{DateTime, Days, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::SleepSpan;

/// End-of-day marker. Distinct from `0.0`, which is the start of a day.
pub const END_OF_DAY: f64 = 24.0;

/// Part of a day expressed in decimal hours, `0.0 <= start <= end <= 24.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourInterval {
    pub start: f64,
    pub end: f64,
}

impl HourInterval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn full_day() -> Self {
        Self::new(0.0, END_OF_DAY)
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// `hour + minute / 60`; seconds are ignored.
pub fn decimal_hour(instant: DateTime<Utc>) -> f64 {
    f64::from(instant.hour()) + f64::from(instant.minute()) / 60.0
}

/// Stage 1: cut one span at every UTC midnight it crosses.
///
/// Zero-width pieces (a span ending exactly at midnight, or a degenerate span
/// restored from storage) are dropped.
pub fn decompose(span: &SleepSpan) -> Vec<(NaiveDate, HourInterval)> {
    if span.end() <= span.start() {
        return Vec::new();
    }

    let start_day = span.start().date_naive();
    let end_day = span.end().date_naive();
    let start_hour = decimal_hour(span.start());
    let end_hour = decimal_hour(span.end());

    let mut pieces = Vec::new();
    if start_day == end_day {
        pieces.push((start_day, HourInterval::new(start_hour, end_hour)));
    } else {
        pieces.push((start_day, HourInterval::new(start_hour, END_OF_DAY)));

        let mut day = start_day.checked_add_days(Days::new(1));
        while let Some(current) = day.filter(|d| *d < end_day) {
            pieces.push((current, HourInterval::full_day()));
            day = current.checked_add_days(Days::new(1));
        }

        pieces.push((end_day, HourInterval::new(0.0, end_hour)));
    }

    pieces.retain(|(_, interval)| !interval.is_empty());
    pieces
}

/// Sort by start and fold touching or overlapping intervals together.
pub fn merge_intervals(mut intervals: Vec<HourInterval>) -> Vec<HourInterval> {
    intervals.retain(|i| !i.is_empty());
    intervals.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut merged: Vec<HourInterval> = Vec::with_capacity(intervals.len());
    let mut iter = intervals.into_iter();
    let Some(mut current) = iter.next() else {
        return merged;
    };

    for next in iter {
        if current.end >= next.start {
            current.end = current.end.max(next.end);
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    merged
}

/// Stage 2: regroup every piece by day, then merge within each day.
/// Days come back in ascending order.
pub fn aggregate<'a, I>(spans: I) -> BTreeMap<NaiveDate, Vec<HourInterval>>
where
    I: IntoIterator<Item = &'a SleepSpan>,
{
    let mut by_day: BTreeMap<NaiveDate, Vec<HourInterval>> = BTreeMap::new();
    for span in spans {
        for (day, interval) in decompose(span) {
            by_day.entry(day).or_default().push(interval);
        }
    }

    by_day
        .into_iter()
        .map(|(day, intervals)| (day, merge_intervals(intervals)))
        .collect()
}
