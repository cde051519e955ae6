use chrono::{NaiveDate, NaiveTime};
use log::info;
use std::sync::Arc;

use crate::application::clock::Clock;
use crate::application::dtos::{SleepChartDto, SleepEntryDto, SleepListDto};
use crate::application::utils::{
    last_instant_of_day, parse_date_param, parse_range_end, parse_range_start,
};
use drive_domain::shared::{DomainError, UserId};
use drive_domain::sleep::{
    build_sleep_chart, default_chart_range, SleepEntry, SleepEntryRepository, SleepSummary,
};

pub struct SleepQueries {
    sleep_repo: Arc<dyn SleepEntryRepository>,
    clock: Arc<dyn Clock>,
}

impl SleepQueries {
    pub fn new(sleep_repo: Arc<dyn SleepEntryRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { sleep_repo, clock }
    }

    /// Entries whose start lies in the optional range, plus their summary.
    /// Bare dates are whole days in the user's offset.
    pub async fn list_entries(
        &self,
        user_id: &UserId,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<SleepListDto, DomainError> {
        let offset = self.clock.offset();
        let from = start_date
            .map(|s| parse_range_start("startDate", s, offset))
            .transpose()?;
        let to = end_date
            .map(|s| parse_range_end("endDate", s, offset))
            .transpose()?;
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(DomainError::Validation(
                    "startDate must not be after endDate".to_string(),
                ));
            }
        }

        let entries = self.sleep_repo.find_by_user(user_id, from, to).await?;
        let summary = SleepSummary::from_entries(&entries);

        info!(
            "[sleep] list_entries user_id={} entries={} average={:.2}",
            user_id, summary.entry_count, summary.average_hours
        );

        Ok(SleepListDto {
            sleep_entries: entries
                .iter()
                .map(|e| SleepEntryDto::from_entry(e, offset))
                .collect(),
            summary: summary.into(),
        })
    }

    /// Per-day chart over `[from, to]` (UTC days). Missing bounds come from
    /// the previous-month-through-current-month window.
    pub async fn get_chart(
        &self,
        user_id: &UserId,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<SleepChartDto, DomainError> {
        let (default_from, default_to) = default_chart_range(self.clock.today());
        let from = from
            .map(|s| parse_date_param("from", s))
            .transpose()?
            .unwrap_or(default_from);
        let to = to
            .map(|s| parse_date_param("to", s))
            .transpose()?
            .unwrap_or(default_to);

        let range_start = from.and_time(NaiveTime::MIN).and_utc();
        let range_end = end_of_day(to);

        // Spans that start before the range may still reach into it
        let entries: Vec<SleepEntry> = self
            .sleep_repo
            .find_by_user(user_id, None, Some(range_end))
            .await?
            .into_iter()
            .filter(|e| e.span().end() > range_start)
            .collect();
        let spans: Vec<_> = entries.iter().map(SleepEntry::span).collect();

        let chart = build_sleep_chart(&spans, from, to)?;

        info!(
            "[sleep] get_chart user_id={} from={} to={} entries={} average={:.2}",
            user_id,
            from,
            to,
            spans.len(),
            chart.average_sleep
        );

        Ok(chart.into())
    }
}

fn end_of_day(date: NaiveDate) -> chrono::DateTime<chrono::Utc> {
    date.and_time(last_instant_of_day()).and_utc()
}
