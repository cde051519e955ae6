mod completion_handlers;
mod habit_handlers;
mod ownership;
mod sleep_handlers;


pub use completion_handlers::{
    CreateCompletionCommandHandler, DeleteCompletionCommandHandler, SetCompletionCommandHandler,
    ToggleTodayCommandHandler,
};
pub use habit_handlers::{
    CreateHabitCommandHandler, DeleteHabitCommandHandler, UpdateHabitCommandHandler,
};
pub use ownership::{load_owned_completion, load_owned_habit};
pub use sleep_handlers::{CreateSleepEntryCommandHandler, DeleteSleepEntryCommandHandler};
