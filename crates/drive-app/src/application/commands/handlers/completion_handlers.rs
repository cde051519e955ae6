use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::ownership::{load_owned_completion, load_owned_habit};
use crate::application::clock::Clock;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::completion_commands::*;
use crate::application::dtos::{CompletionDto, ToggleTodayDto};
use crate::application::utils::parse_date_param;
use drive_domain::completion::{CompletionRecord, CompletionRepository, COMPLETION_DATE_FORMAT};
use drive_domain::habit::HabitRepository;
use drive_domain::shared::DomainError;
use drive_domain::streak::compute_streak_stats;

/// Create (or overwrite) the completion of one habit on one day
pub struct CreateCompletionCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    completion_repo: Arc<dyn CompletionRepository>,
}

impl CreateCompletionCommandHandler {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        completion_repo: Arc<dyn CompletionRepository>,
    ) -> Self {
        Self {
            habit_repo,
            completion_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<CreateCompletionCommand> for CreateCompletionCommandHandler {
    type Result = CompletionDto;

    async fn handle(&self, cmd: CreateCompletionCommand) -> Result<Self::Result, DomainError> {
        let date = parse_date_param("date", &cmd.date)?;
        let habit =
            load_owned_habit(self.habit_repo.as_ref(), &cmd.user_id, &cmd.habit_id).await?;

        let saved = self
            .completion_repo
            .save(&CompletionRecord::new(
                habit.id().clone(),
                date,
                cmd.completed,
            ))
            .await?;

        info!(
            "[completion] saved habit_id={} date={} completed={}",
            habit.id(),
            date,
            saved.completed()
        );

        Ok(CompletionDto::from(&saved))
    }
}

/// Flip the flag of an existing completion
pub struct SetCompletionCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    completion_repo: Arc<dyn CompletionRepository>,
}

impl SetCompletionCommandHandler {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        completion_repo: Arc<dyn CompletionRepository>,
    ) -> Self {
        Self {
            habit_repo,
            completion_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<SetCompletionCommand> for SetCompletionCommandHandler {
    type Result = CompletionDto;

    async fn handle(&self, cmd: SetCompletionCommand) -> Result<Self::Result, DomainError> {
        let record = load_owned_completion(
            self.habit_repo.as_ref(),
            self.completion_repo.as_ref(),
            &cmd.user_id,
            &cmd.completion_id,
        )
        .await?;

        self.completion_repo
            .set_completed(record.id(), cmd.completed)
            .await?;

        let updated = CompletionRecord::restore(
            record.id().clone(),
            record.habit_id().clone(),
            record.date(),
            cmd.completed,
            record.created_at(),
        );

        info!(
            "[completion] set completion_id={} completed={}",
            updated.id(),
            cmd.completed
        );

        Ok(CompletionDto::from(&updated))
    }
}

/// Delete completion command handler
pub struct DeleteCompletionCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    completion_repo: Arc<dyn CompletionRepository>,
}

impl DeleteCompletionCommandHandler {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        completion_repo: Arc<dyn CompletionRepository>,
    ) -> Self {
        Self {
            habit_repo,
            completion_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteCompletionCommand> for DeleteCompletionCommandHandler {
    type Result = DeleteCompletionResult;

    async fn handle(&self, cmd: DeleteCompletionCommand) -> Result<Self::Result, DomainError> {
        let record = load_owned_completion(
            self.habit_repo.as_ref(),
            self.completion_repo.as_ref(),
            &cmd.user_id,
            &cmd.completion_id,
        )
        .await?;

        self.completion_repo.delete(record.id()).await?;

        info!("[completion] deleted completion_id={}", record.id());

        Ok(DeleteCompletionResult { success: true })
    }
}

/// Toggle today: an existing record for today is removed, otherwise a
/// completed record is created.
pub struct ToggleTodayCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    completion_repo: Arc<dyn CompletionRepository>,
    clock: Arc<dyn Clock>,
}

impl ToggleTodayCommandHandler {
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
}

#[async_trait]
impl CommandHandler<ToggleTodayCommand> for ToggleTodayCommandHandler {
    type Result = ToggleTodayDto;

    async fn handle(&self, cmd: ToggleTodayCommand) -> Result<Self::Result, DomainError> {
        let habit =
            load_owned_habit(self.habit_repo.as_ref(), &cmd.user_id, &cmd.habit_id).await?;
        let today = self.clock.today();

        let existing = self
            .completion_repo
            .find_by_habit_and_date(habit.id(), today)
            .await?;

        let completion = match existing {
            Some(record) => {
                self.completion_repo.delete(record.id()).await?;
                None
            }
            None => Some(
                self.completion_repo
                    .save(&CompletionRecord::new(habit.id().clone(), today, true))
                    .await?,
            ),
        };

        let history = self.completion_repo.list_by_habit(habit.id()).await?;
        let stats = compute_streak_stats(&history, today);

        info!(
            "[streak] toggled habit_id={} date={} completed={} current={}",
            habit.id(),
            today,
            completion.is_some(),
            stats.current_streak
        );

        Ok(ToggleTodayDto {
            habit_id: habit.id().to_string(),
            date: today.format(COMPLETION_DATE_FORMAT).to_string(),
            completed: completion.is_some(),
            completion: completion.as_ref().map(CompletionDto::from),
            streak: stats.into(),
        })
    }
}
