#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]

mod catalog;
mod error;
mod report;
mod sort;
mod system;
mod types;
pub mod output;

pub use catalog::{build_assets, build_exchange_rates, parse_date};
pub use error::InventoryError;
pub use report::{
    DAYS_ALARM, DAYS_WARNING, age_in_days, classify_age, collect_report_data, convert_price,
    format_price, rate_for,
};
pub use sort::{sort_assets, sort_by_office_and_date, sort_by_type_and_date};
pub use system::{Clock, DefaultClock, FixedClock};
pub use types::{
    AgeLevel, Asset, AssetKind, DateStyle, ExchangeRate, Office, Options, ReportData, ReportRow,
    SortOrder,
};
