use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::ownership::load_owned_habit;
use crate::application::clock::Clock;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::dtos::HabitDto;
use drive_domain::completion::CompletionRepository;
use drive_domain::habit::{Habit, HabitChanges, HabitRepository, HexColor};
use drive_domain::shared::DomainError;

/// Create habit command handler
pub struct CreateHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateHabitCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { habit_repo, clock }
    }
}

#[async_trait]
impl CommandHandler<CreateHabitCommand> for CreateHabitCommandHandler {
    type Result = HabitDto;

    async fn handle(&self, cmd: CreateHabitCommand) -> Result<Self::Result, DomainError> {
        let color = HexColor::parse(&cmd.color)?;
        let habit = Habit::new(
            cmd.user_id,
            cmd.name,
            cmd.category,
            cmd.icon,
            color,
            cmd.description,
        )?;

        self.habit_repo.save(&habit).await?;

        info!(
            "[habit] created habit_id={} user_id={}",
            habit.id(),
            habit.user_id()
        );

        Ok(HabitDto::from_habit(&habit, &[], self.clock.today()))
    }
}

/// Update habit command handler
pub struct UpdateHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    completion_repo: Arc<dyn CompletionRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateHabitCommandHandler {
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
impl CommandHandler<UpdateHabitCommand> for UpdateHabitCommandHandler {
    type Result = HabitDto;

    async fn handle(&self, cmd: UpdateHabitCommand) -> Result<Self::Result, DomainError> {
        let mut habit =
            load_owned_habit(self.habit_repo.as_ref(), &cmd.user_id, &cmd.habit_id).await?;

        let color = cmd.color.as_deref().map(HexColor::parse).transpose()?;
        habit.apply(HabitChanges {
            name: cmd.name,
            category: cmd.category,
            icon: cmd.icon,
            color,
            description: cmd.description,
        })?;

        self.habit_repo.save(&habit).await?;
        let completions = self.completion_repo.list_by_habit(habit.id()).await?;

        info!("[habit] updated habit_id={}", habit.id());

        Ok(HabitDto::from_habit(&habit, &completions, self.clock.today()))
    }
}

/// Delete habit command handler. Completions go with it.
pub struct DeleteHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
}

impl DeleteHabitCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteHabitCommand> for DeleteHabitCommandHandler {
    type Result = DeleteHabitResult;

    async fn handle(&self, cmd: DeleteHabitCommand) -> Result<Self::Result, DomainError> {
        let habit =
            load_owned_habit(self.habit_repo.as_ref(), &cmd.user_id, &cmd.habit_id).await?;

        self.habit_repo.delete(habit.id()).await?;

        info!("[habit] deleted habit_id={}", habit.id());

        Ok(DeleteHabitResult { success: true })
    }
}
