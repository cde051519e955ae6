// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod completion;
pub mod habit;
pub mod identity;
pub mod shared;
pub mod sleep;
pub mod streak;

// Re-exports for convenience
pub use shared::{CompletionId, DomainError, HabitId, SleepEntryId, UserId};
