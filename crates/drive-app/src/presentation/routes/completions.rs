use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::completion_commands::*;
use crate::application::dtos::{CreateCompletionInput, SetCompletionInput, ToggleTodayDto};
use crate::presentation::auth::CurrentUser;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

pub async fn create_completion(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<CreateCompletionInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(input) = payload?;
    let command = CreateCompletionCommand {
        user_id,
        habit_id: input.habit_id,
        date: input.date,
        completed: input.completed,
    };

    let completion = state
        .command_handlers
        .create_completion
        .handle(command)
        .await?;
    Ok(Json(json!({ "completion": completion })))
}

pub async fn set_completion(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(completion_id): Path<String>,
    payload: Result<Json<SetCompletionInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(input) = payload?;
    let command = SetCompletionCommand {
        user_id,
        completion_id,
        completed: input.completed,
    };

    let completion = state.command_handlers.set_completion.handle(command).await?;
    Ok(Json(json!({ "completion": completion })))
}

pub async fn delete_completion(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(completion_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .command_handlers
        .delete_completion
        .handle(DeleteCompletionCommand {
            user_id,
            completion_id,
        })
        .await?;

    Ok(Json(
        json!({ "message": "Habit completion deleted successfully" }),
    ))
}

/// Mark today done, or undo it if it already has a record
pub async fn toggle_today(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(habit_id): Path<String>,
) -> Result<Json<ToggleTodayDto>, ApiError> {
    let result = state
        .command_handlers
        .toggle_today
        .handle(ToggleTodayCommand { user_id, habit_id })
        .await?;
    Ok(Json(result))
}
