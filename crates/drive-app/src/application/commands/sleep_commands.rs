use crate::application::commands::command_handler::Command;
use drive_domain::shared::UserId;

/// Log a sleep entry. Both instants are RFC 3339 strings.
#[derive(Debug, Clone)]
pub struct CreateSleepEntryCommand {
    pub user_id: UserId,
    pub start_date: String,
    pub end_date: String,
}

impl Command for CreateSleepEntryCommand {}

#[derive(Debug, Clone)]
pub struct DeleteSleepEntryCommand {
    pub user_id: UserId,
    pub entry_id: String,
}

impl Command for DeleteSleepEntryCommand {}

#[derive(Debug, Clone)]
pub struct DeleteSleepEntryResult {
    pub success: bool,
}
