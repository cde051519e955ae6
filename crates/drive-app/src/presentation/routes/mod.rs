mod completions;
mod dashboard;
mod habits;
mod health;
mod sleep;

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::{delete, get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;
use drive_domain::shared::{DomainError, ErrorCode};

pub fn build_router(
    state: Arc<AppState>,
    allowed_origin: Option<&str>,
) -> Result<Router, DomainError> {
    let cors = cors_layer(&state.user_header, allowed_origin)?;

    let router = Router::new()
        .route("/healthz", get(health::health))
        .route(
            "/api/habits",
            get(habits::list_habits).post(habits::create_habit),
        )
        .route(
            "/api/habits/completion",
            post(completions::create_completion),
        )
        .route(
            "/api/habits/completion/{id}",
            patch(completions::set_completion).delete(completions::delete_completion),
        )
        .route(
            "/api/habits/{id}",
            patch(habits::update_habit).delete(habits::delete_habit),
        )
        .route("/api/habits/{id}/streak", get(habits::get_streak))
        .route("/api/habits/{id}/grid", get(habits::get_grid))
        .route("/api/habits/{id}/toggle", post(completions::toggle_today))
        .route(
            "/api/sleep",
            get(sleep::list_sleep_entries).post(sleep::create_sleep_entry),
        )
        .route("/api/sleep/graph", get(sleep::get_sleep_chart))
        .route("/api/sleep/{id}", delete(sleep::delete_sleep_entry))
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(router)
}

fn cors_layer(user_header: &str, allowed_origin: Option<&str>) -> Result<CorsLayer, DomainError> {
    let user_header = HeaderName::from_bytes(user_header.as_bytes())
        .map_err(|e| DomainError::Validation(format!("Invalid user header name: {}", e)))?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, user_header])
        .max_age(Duration::from_secs(60 * 60));

    // Without an origin no cross-origin caller is allowed
    match allowed_origin {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin)
                .map_err(|e| DomainError::Validation(format!("Invalid allowed origin: {}", e)))?;
            Ok(cors.allow_origin(origin))
        }
        None => Ok(cors),
    }
}

async fn not_found() -> ApiError {
    ApiError::from_code(ErrorCode::NotFound, "No such route")
}
