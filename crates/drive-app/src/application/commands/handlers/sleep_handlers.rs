use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::clock::Clock;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::sleep_commands::*;
use crate::application::dtos::SleepEntryDto;
use crate::application::utils::parse_instant_param;
use drive_domain::shared::{DomainError, SleepEntryId};
use drive_domain::sleep::{SleepEntry, SleepEntryRepository, SleepSpan};

/// Create sleep entry command handler
pub struct CreateSleepEntryCommandHandler {
    sleep_repo: Arc<dyn SleepEntryRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateSleepEntryCommandHandler {
    pub fn new(sleep_repo: Arc<dyn SleepEntryRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { sleep_repo, clock }
    }
}

#[async_trait]
impl CommandHandler<CreateSleepEntryCommand> for CreateSleepEntryCommandHandler {
    type Result = SleepEntryDto;

    async fn handle(&self, cmd: CreateSleepEntryCommand) -> Result<Self::Result, DomainError> {
        let start = parse_instant_param("startDate", &cmd.start_date)?;
        let end = parse_instant_param("endDate", &cmd.end_date)?;
        let entry = SleepEntry::new(cmd.user_id, SleepSpan::new(start, end)?);

        self.sleep_repo.save(&entry).await?;

        info!(
            "[sleep] created entry_id={} hours={:.2}",
            entry.id(),
            entry.duration_hours()
        );

        Ok(SleepEntryDto::from_entry(&entry, self.clock.offset()))
    }
}

/// Delete sleep entry command handler
pub struct DeleteSleepEntryCommandHandler {
    sleep_repo: Arc<dyn SleepEntryRepository>,
}

impl DeleteSleepEntryCommandHandler {
    pub fn new(sleep_repo: Arc<dyn SleepEntryRepository>) -> Self {
        Self { sleep_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteSleepEntryCommand> for DeleteSleepEntryCommandHandler {
    type Result = DeleteSleepEntryResult;

    async fn handle(&self, cmd: DeleteSleepEntryCommand) -> Result<Self::Result, DomainError> {
        let entry_id = SleepEntryId::parse(&cmd.entry_id)?;

        let entry = self
            .sleep_repo
            .find_by_id(&entry_id)
            .await?
            .filter(|e| e.is_owned_by(&cmd.user_id))
            .ok_or_else(|| DomainError::SleepEntryNotFound(cmd.entry_id.clone()))?;

        self.sleep_repo.delete(entry.id()).await?;

        info!("[sleep] deleted entry_id={}", entry.id());

        Ok(DeleteSleepEntryResult { success: true })
    }
}
