mod aggregator;
mod chart;
mod entry;
mod repository;
mod summary;


pub use aggregator::{aggregate, decimal_hour, decompose, merge_intervals, HourInterval, END_OF_DAY};
pub use chart::{
    build_sleep_chart, default_chart_range, format_decimal_hour, DaySleep, SleepChart,
    MAX_CHART_DAYS, NO_TIME,
};
pub use entry::{SleepEntry, SleepSpan};
pub use repository::SleepEntryRepository;
pub use summary::{SleepQuality, SleepSummary};
