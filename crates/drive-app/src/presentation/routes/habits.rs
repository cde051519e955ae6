use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::dtos::{CreateHabitInput, HeatGridDto, StreakDto, UpdateHabitInput};
use crate::presentation::auth::CurrentUser;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

/// All habits of the caller with completions and streaks
pub async fn list_habits(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Value>, ApiError> {
    let habits = state.queries.habits.list_habits(&user_id).await?;
    Ok(Json(json!({ "habits": habits })))
}

pub async fn create_habit(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<CreateHabitInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(input) = payload?;
    let command = CreateHabitCommand {
        user_id,
        name: input.name,
        category: input.category,
        icon: input.icon,
        color: input.color,
        description: input.description,
    };

    let habit = state.command_handlers.create_habit.handle(command).await?;
    Ok(Json(json!({ "habit": habit })))
}

pub async fn update_habit(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(habit_id): Path<String>,
    payload: Result<Json<UpdateHabitInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(input) = payload?;
    let command = UpdateHabitCommand {
        user_id,
        habit_id,
        name: input.name,
        category: input.category,
        icon: input.icon,
        color: input.color,
        description: input.description,
    };

    let habit = state.command_handlers.update_habit.handle(command).await?;
    Ok(Json(json!({ "habit": habit })))
}

pub async fn delete_habit(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(habit_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .command_handlers
        .delete_habit
        .handle(DeleteHabitCommand { user_id, habit_id })
        .await?;

    Ok(Json(json!({ "message": "Habit deleted successfully" })))
}

pub async fn get_streak(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(habit_id): Path<String>,
) -> Result<Json<StreakDto>, ApiError> {
    let streak = state.queries.habits.get_streak(&user_id, &habit_id).await?;
    Ok(Json(streak))
}

pub async fn get_grid(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(habit_id): Path<String>,
) -> Result<Json<HeatGridDto>, ApiError> {
    let grid = state.queries.habits.get_grid(&user_id, &habit_id).await?;
    Ok(Json(grid))
}
