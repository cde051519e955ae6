use crate::application::commands::command_handler::Command;
use drive_domain::shared::UserId;

/// Create habit command
#[derive(Debug, Clone)]
pub struct CreateHabitCommand {
    pub user_id: UserId,
    pub name: String,
    pub category: String,
    pub icon: String,
    pub color: String,
    pub description: Option<String>,
}

impl Command for CreateHabitCommand {}

/// Update habit command. `None` leaves a field untouched;
/// `description: Some(None)` clears it.
#[derive(Debug, Clone)]
pub struct UpdateHabitCommand {
    pub user_id: UserId,
    pub habit_id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub description: Option<Option<String>>,
}

impl Command for UpdateHabitCommand {}

/// Delete habit command
#[derive(Debug, Clone)]
pub struct DeleteHabitCommand {
    pub user_id: UserId,
    pub habit_id: String,
}

impl Command for DeleteHabitCommand {}

/// Delete habit command result
#[derive(Debug, Clone)]
pub struct DeleteHabitResult {
    pub success: bool,
}
