use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::queries::{DashboardQueries, HabitQueries, SleepQueries};
use drive_domain::identity::IdentityProvider;

/// Command handlers container
pub struct CommandHandlers {
    pub create_habit: Arc<CreateHabitCommandHandler>,
    pub update_habit: Arc<UpdateHabitCommandHandler>,
    pub delete_habit: Arc<DeleteHabitCommandHandler>,
    pub create_completion: Arc<CreateCompletionCommandHandler>,
    pub set_completion: Arc<SetCompletionCommandHandler>,
    pub delete_completion: Arc<DeleteCompletionCommandHandler>,
    pub toggle_today: Arc<ToggleTodayCommandHandler>,
    pub create_sleep_entry: Arc<CreateSleepEntryCommandHandler>,
    pub delete_sleep_entry: Arc<DeleteSleepEntryCommandHandler>,
}

pub struct Queries {
    pub habits: Arc<HabitQueries>,
    pub sleep: Arc<SleepQueries>,
    pub dashboard: Arc<DashboardQueries>,
}

pub struct AppState {
    pub pool: Arc<SqlitePool>,
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
    pub identity: Arc<dyn IdentityProvider>,
    /// Request header the identity provider reads the user id from
    pub user_header: String,
}
