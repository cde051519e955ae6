mod record;
mod repository;

pub use record::{parse_completion_date, CompletionRecord, COMPLETION_DATE_FORMAT};
pub use repository::CompletionRepository;
