mod dashboard_dto;
mod habit_dto;
mod sleep_dto;
mod streak_dto;

pub use dashboard_dto::*;
pub use habit_dto::*;
pub use sleep_dto::*;
pub use streak_dto::*;
