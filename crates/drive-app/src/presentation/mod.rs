pub mod auth;
pub mod bootstrap;
pub mod error;
pub mod routes;
pub mod state;

pub use bootstrap::{build_app_state, build_state};
pub use routes::build_router;
pub use state::AppState;
