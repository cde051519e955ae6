use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::clock::{Clock, SystemClock};
use crate::application::commands::handlers::*;
use crate::application::queries::{DashboardQueries, HabitQueries, SleepQueries};
use crate::presentation::state::{AppState, CommandHandlers, Queries};
use drive_domain::completion::CompletionRepository;
use drive_domain::habit::HabitRepository;
use drive_domain::identity::IdentityProvider;
use drive_domain::shared::DomainError;
use drive_domain::sleep::SleepEntryRepository;
use drive_infrastructure::config::AppConfig;
use drive_infrastructure::identity::TrustedHeaderIdentityProvider;
use drive_infrastructure::persistence::{
    repositories::{
        SqliteCompletionRepository, SqliteHabitRepository, SqliteSleepEntryRepository,
    },
    Database,
};

pub async fn build_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    info!("Database path: {}", config.database_path.display());

    info!("🔌 Connecting to database...");
    let started_at = Instant::now();
    let database = Database::new(&config.database_path, &config.timeouts).await?;
    info!(
        "✓ Database connection established ({}ms)",
        started_at.elapsed().as_millis()
    );

    info!("🔄 Running migrations...");
    let started_at = Instant::now();
    database.run_migrations().await?;
    info!(
        "✓ Migrations completed ({}ms)",
        started_at.elapsed().as_millis()
    );

    let clock = Arc::new(SystemClock::with_offset_minutes(config.utc_offset_minutes)?)
        as Arc<dyn Clock>;
    let identity = Arc::new(TrustedHeaderIdentityProvider::new(config.user_header.clone()))
        as Arc<dyn IdentityProvider>;

    info!(
        "Users identified by header '{}', calendar offset {} minutes",
        config.user_header, config.utc_offset_minutes
    );

    Ok(build_state(
        Arc::new(database.pool().clone()),
        identity,
        clock,
        config.user_header.clone(),
    ))
}

/// Wire repositories, handlers and queries over an already migrated pool.
pub fn build_state(
    pool: Arc<SqlitePool>,
    identity: Arc<dyn IdentityProvider>,
    clock: Arc<dyn Clock>,
    user_header: String,
) -> AppState {
    let habit_repo =
        Arc::new(SqliteHabitRepository::new(pool.clone())) as Arc<dyn HabitRepository>;
    let completion_repo = Arc::new(SqliteCompletionRepository::new(pool.clone()))
        as Arc<dyn CompletionRepository>;
    let sleep_repo = Arc::new(SqliteSleepEntryRepository::new(pool.clone()))
        as Arc<dyn SleepEntryRepository>;

    let command_handlers = CommandHandlers {
        create_habit: Arc::new(CreateHabitCommandHandler::new(
            habit_repo.clone(),
            clock.clone(),
        )),
        update_habit: Arc::new(UpdateHabitCommandHandler::new(
            habit_repo.clone(),
            completion_repo.clone(),
            clock.clone(),
        )),
        delete_habit: Arc::new(DeleteHabitCommandHandler::new(habit_repo.clone())),
        create_completion: Arc::new(CreateCompletionCommandHandler::new(
            habit_repo.clone(),
            completion_repo.clone(),
        )),
        set_completion: Arc::new(SetCompletionCommandHandler::new(
            habit_repo.clone(),
            completion_repo.clone(),
        )),
        delete_completion: Arc::new(DeleteCompletionCommandHandler::new(
            habit_repo.clone(),
            completion_repo.clone(),
        )),
        toggle_today: Arc::new(ToggleTodayCommandHandler::new(
            habit_repo.clone(),
            completion_repo.clone(),
            clock.clone(),
        )),
        create_sleep_entry: Arc::new(CreateSleepEntryCommandHandler::new(
            sleep_repo.clone(),
            clock.clone(),
        )),
        delete_sleep_entry: Arc::new(DeleteSleepEntryCommandHandler::new(sleep_repo.clone())),
    };

    let queries = Queries {
        habits: Arc::new(HabitQueries::new(
            habit_repo.clone(),
            completion_repo.clone(),
            clock.clone(),
        )),
        sleep: Arc::new(SleepQueries::new(sleep_repo.clone(), clock.clone())),
        dashboard: Arc::new(DashboardQueries::new(
            habit_repo,
            completion_repo,
            sleep_repo,
            clock,
        )),
    };

    AppState {
        pool,
        queries,
        command_handlers,
        identity,
        user_header,
    }
}
