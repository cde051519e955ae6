pub mod clock;
pub mod commands;
pub mod dtos;
pub mod queries;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

pub use clock::{Clock, FixedClock, SystemClock};
pub use utils::ResultExt;
