use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::application::ResultExt;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

/// Liveness, including a round trip to the database
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    sqlx::query("SELECT 1")
        .execute(state.pool.as_ref())
        .await
        .to_infra_err()?;

    Ok(Json(json!({ "status": "ok" })))
}
