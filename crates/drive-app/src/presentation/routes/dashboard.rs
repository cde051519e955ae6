use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::application::dtos::DashboardDto;
use crate::presentation::auth::CurrentUser;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<DashboardDto>, ApiError> {
    let dashboard = state.queries.dashboard.get_dashboard(&user_id).await?;
    Ok(Json(dashboard))
}
