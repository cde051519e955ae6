pub mod completion_repo;
pub mod habit_repo;
pub mod sleep_repo;

pub use completion_repo::SqliteCompletionRepository;
pub use habit_repo::SqliteHabitRepository;
pub use sleep_repo::SqliteSleepEntryRepository;
