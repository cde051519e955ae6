use log::info;
use std::collections::HashSet;
use std::sync::Arc;

use crate::application::clock::Clock;
use crate::application::dtos::DashboardDto;
use drive_domain::completion::CompletionRepository;
use drive_domain::habit::HabitRepository;
use drive_domain::shared::{DomainError, HabitId, UserId};
use drive_domain::sleep::{SleepEntryRepository, SleepSummary};
use drive_domain::streak::compute_streak;

/// Number of most recent sleep entries the dashboard averages over
pub const RECENT_SLEEP_WINDOW: u32 = 7;

pub struct DashboardQueries {
    habit_repo: Arc<dyn HabitRepository>,
    completion_repo: Arc<dyn CompletionRepository>,
    sleep_repo: Arc<dyn SleepEntryRepository>,
    clock: Arc<dyn Clock>,
}

impl DashboardQueries {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        completion_repo: Arc<dyn CompletionRepository>,
        sleep_repo: Arc<dyn SleepEntryRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            habit_repo,
            completion_repo,
            sleep_repo,
            clock,
        }
    }

    pub async fn get_dashboard(&self, user_id: &UserId) -> Result<DashboardDto, DomainError> {
        let today = self.clock.today();
        let habits = self.habit_repo.find_by_user(user_id).await?;
        let ids: Vec<HabitId> = habits.iter().map(|h| h.id().clone()).collect();
        let completions = self.completion_repo.list_by_habits(&ids).await?;

        let mut active_streaks = 0;
        for habit in &habits {
            let own: Vec<_> = completions
                .iter()
                .filter(|c| c.habit_id() == habit.id())
                .cloned()
                .collect();
            if compute_streak(&own, today) > 0 {
                active_streaks += 1;
            }
        }

        let completed_today = completions
            .iter()
            .filter(|c| c.completed() && c.date() == today)
            .map(|c| c.habit_id())
            .collect::<HashSet<_>>()
            .len();

        let recent = self
            .sleep_repo
            .find_latest(user_id, RECENT_SLEEP_WINDOW)
            .await?;
        let sleep = SleepSummary::from_entries(&recent);

        let dto = DashboardDto {
            total_habits: habits.len(),
            active_streaks,
            completed_today,
            last_sleep_hours: sleep.last_hours,
            average_sleep_hours: sleep.average_hours,
            sleep_quality: sleep.quality.to_string(),
        };

        info!(
            "[dashboard] user_id={} habits={} active_streaks={} completed_today={}",
            user_id, dto.total_habits, dto.active_streaks, dto.completed_today
        );

        Ok(dto)
    }
}
