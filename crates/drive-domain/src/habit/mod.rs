mod aggregate;
mod color;
mod repository;


pub use aggregate::{Habit, HabitChanges};
pub use color::HexColor;
pub use repository::HabitRepository;
