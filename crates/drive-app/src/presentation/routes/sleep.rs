use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::sleep_commands::*;
use crate::application::dtos::{CreateSleepEntryInput, SleepChartDto, SleepListDto};
use crate::presentation::auth::CurrentUser;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepRangeParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChartParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

pub async fn list_sleep_entries(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    params: Result<Query<SleepRangeParams>, QueryRejection>,
) -> Result<Json<SleepListDto>, ApiError> {
    let Query(params) = params?;
    let list = state
        .queries
        .sleep
        .list_entries(
            &user_id,
            params.start_date.as_deref(),
            params.end_date.as_deref(),
        )
        .await?;
    Ok(Json(list))
}

pub async fn create_sleep_entry(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<CreateSleepEntryInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(input) = payload?;
    let command = CreateSleepEntryCommand {
        user_id,
        start_date: input.start_date,
        end_date: input.end_date,
    };

    let entry = state
        .command_handlers
        .create_sleep_entry
        .handle(command)
        .await?;
    Ok(Json(json!({ "sleepEntry": entry })))
}

pub async fn delete_sleep_entry(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(entry_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .command_handlers
        .delete_sleep_entry
        .handle(DeleteSleepEntryCommand { user_id, entry_id })
        .await?;

    Ok(Json(json!({ "message": "Sleep entry deleted successfully" })))
}

/// Per-day sleep chart; `from`/`to` are `YYYY-MM-DD`
pub async fn get_sleep_chart(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    params: Result<Query<ChartParams>, QueryRejection>,
) -> Result<Json<SleepChartDto>, ApiError> {
    let Query(params) = params?;
    let chart = state
        .queries
        .sleep
        .get_chart(&user_id, params.from.as_deref(), params.to.as_deref())
        .await?;
    Ok(Json(chart))
}
