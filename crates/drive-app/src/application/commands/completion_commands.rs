use crate::application::commands::command_handler::Command;
use drive_domain::shared::UserId;

/// Record a completion for a given day; a second call for the same day
/// overwrites the flag.
#[derive(Debug, Clone)]
pub struct CreateCompletionCommand {
    pub user_id: UserId,
    pub habit_id: String,
    pub date: String,
    pub completed: bool,
}

impl Command for CreateCompletionCommand {}

#[derive(Debug, Clone)]
pub struct SetCompletionCommand {
    pub user_id: UserId,
    pub completion_id: String,
    pub completed: bool,
}

impl Command for SetCompletionCommand {}

#[derive(Debug, Clone)]
pub struct DeleteCompletionCommand {
    pub user_id: UserId,
    pub completion_id: String,
}

impl Command for DeleteCompletionCommand {}

#[derive(Debug, Clone)]
pub struct DeleteCompletionResult {
    pub success: bool,
}

/// Flip today's completion for a habit.
#[derive(Debug, Clone)]
pub struct ToggleTodayCommand {
    pub user_id: UserId,
    pub habit_id: String,
}

impl Command for ToggleTodayCommand {}
