use log::info;
use std::sync::Arc;

use crate::application::clock::Clock;
use crate::application::commands::handlers::load_owned_habit;
use crate::application::dtos::{HabitDto, HeatGridDto, StreakDto};
use drive_domain::completion::CompletionRepository;
use drive_domain::habit::HabitRepository;
use drive_domain::shared::{DomainError, HabitId, UserId};
use drive_domain::streak::{compute_streak_stats, HeatGrid};

pub struct HabitQueries {
    habit_repo: Arc<dyn HabitRepository>,
    completion_repo: Arc<dyn CompletionRepository>,
    clock: Arc<dyn Clock>,
}

impl HabitQueries {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        completion_repo: Arc<dyn CompletionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            habit_repo,
            completion_repo,
            clock,
        }
    }

    /// Every habit of the user with its completions and streak, oldest habit first
    pub async fn list_habits(&self, user_id: &UserId) -> Result<Vec<HabitDto>, DomainError> {
        let habits = self.habit_repo.find_by_user(user_id).await?;
        let ids: Vec<HabitId> = habits.iter().map(|h| h.id().clone()).collect();
        let completions = self.completion_repo.list_by_habits(&ids).await?;
        let today = self.clock.today();

        let dtos: Vec<HabitDto> = habits
            .iter()
            .map(|habit| HabitDto::from_habit(habit, &completions, today))
            .collect();

        info!(
            "[habit] list_habits user_id={} habits={} completions={}",
            user_id,
            dtos.len(),
            completions.len()
        );

        Ok(dtos)
    }

    pub async fn get_streak(
        &self,
        user_id: &UserId,
        habit_id: &str,
    ) -> Result<StreakDto, DomainError> {
        let habit = load_owned_habit(self.habit_repo.as_ref(), user_id, habit_id).await?;
        let completions = self.completion_repo.list_by_habit(habit.id()).await?;
        let stats = compute_streak_stats(&completions, self.clock.today());

        info!(
            "[streak] get_streak habit_id={} current={} longest={} total={}",
            habit.id(),
            stats.current_streak,
            stats.longest_streak,
            stats.total_completed_days
        );

        Ok(stats.into())
    }

    pub async fn get_grid(
        &self,
        user_id: &UserId,
        habit_id: &str,
    ) -> Result<HeatGridDto, DomainError> {
        let habit = load_owned_habit(self.habit_repo.as_ref(), user_id, habit_id).await?;
        let completions = self.completion_repo.list_by_habit(habit.id()).await?;
        let grid = HeatGrid::with_default_shape(&completions);

        Ok(HeatGridDto::new(habit.id().to_string(), habit.color(), &grid))
    }
}
