mod dashboard_queries;
mod habit_queries;
mod sleep_queries;


pub use dashboard_queries::{DashboardQueries, RECENT_SLEEP_WINDOW};
pub use habit_queries::HabitQueries;
pub use sleep_queries::SleepQueries;
