use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::sync::Arc;

use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;
use drive_domain::shared::UserId;

/// The authenticated caller, resolved from the trusted identity header
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserId);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let credential = parts
            .headers
            .get(state.user_header.as_str())
            .and_then(|value| value.to_str().ok());

        let user_id = state.identity.resolve(credential).await?;
        Ok(CurrentUser(user_id))
    }
}
