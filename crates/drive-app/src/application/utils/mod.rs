pub mod date_params;
pub mod result_ext;

pub use date_params::{
    last_instant_of_day, parse_date_param, parse_instant_param, parse_range_end,
    parse_range_start,
};
pub use result_ext::ResultExt;
