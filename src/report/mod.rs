mod age;
mod collector;
mod convert;

pub use age::{DAYS_ALARM, DAYS_WARNING, age_in_days, classify_age};
pub use collector::collect_report_data;
pub use convert::{convert_price, format_price, rate_for};
