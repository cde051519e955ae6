pub mod command_handler;
pub mod completion_commands;
pub mod habit_commands;
pub mod handlers;
pub mod sleep_commands;

pub use command_handler::{Command, CommandHandler};
