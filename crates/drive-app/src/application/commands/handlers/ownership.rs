use drive_domain::completion::{CompletionRecord, CompletionRepository};
use drive_domain::habit::{Habit, HabitRepository};
use drive_domain::shared::{CompletionId, DomainError, HabitId, UserId};

/// Load a habit the caller owns. A habit that belongs to someone else is
/// reported exactly like a missing one.
pub async fn load_owned_habit(
    habit_repo: &dyn HabitRepository,
    user_id: &UserId,
    raw_habit_id: &str,
) -> Result<Habit, DomainError> {
    let habit_id = HabitId::parse(raw_habit_id)?;

    match habit_repo.find_by_id(&habit_id).await? {
        Some(habit) if habit.is_owned_by(user_id) => Ok(habit),
        Some(_) => {
            log::warn!(
                "[habit] user {} asked for habit {} owned by someone else",
                user_id,
                habit_id
            );
            Err(DomainError::HabitNotFound(raw_habit_id.to_string()))
        }
        None => Err(DomainError::HabitNotFound(raw_habit_id.to_string())),
    }
}

/// Load a completion whose habit the caller owns.
pub async fn load_owned_completion(
    habit_repo: &dyn HabitRepository,
    completion_repo: &dyn CompletionRepository,
    user_id: &UserId,
    raw_completion_id: &str,
) -> Result<CompletionRecord, DomainError> {
    let completion_id = CompletionId::parse(raw_completion_id)?;
    let not_found = || DomainError::CompletionNotFound(raw_completion_id.to_string());

    let record = completion_repo
        .find_by_id(&completion_id)
        .await?
        .ok_or_else(not_found)?;

    match habit_repo.find_by_id(record.habit_id()).await? {
        Some(habit) if habit.is_owned_by(user_id) => Ok(record),
        _ => Err(not_found()),
    }
}
