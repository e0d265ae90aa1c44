use std::rc::Rc;

use chrono::NaiveDate;

use crate::error::InventoryError;
use crate::types::{Asset, ExchangeRate, Office};

/// Parse a `yyyy-mm-dd` literal.
///
/// # Errors
/// Returns [`InventoryError::DateParse`] when `value` is not a valid date.
pub fn parse_date(value: &str) -> Result<NaiveDate, InventoryError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| InventoryError::DateParse {
        value: value.to_string(),
        source,
    })
}

/// The fixed sample inventory, in registration order.
///
/// # Errors
/// Returns an error if one of the date literals fails to parse.
pub fn build_assets() -> Result<Vec<Asset>, InventoryError> {
    let sweden = Rc::new(Office::new("Sweden"));
    let usa = Rc::new(Office::new("USA"));
    let spain = Rc::new(Office::new("Spain"));

    Ok(vec![
        Asset::computer("HP", "Elitebook", parse_date("2019-06-01")?, &spain, 1423.0, "EUR", 10.12),
        Asset::phone("iPhone", "X", parse_date("2018-07-15")?, &sweden, 1245.0, "SEK", 8.45),
        Asset::computer("Asus", "W234", parse_date("2017-04-21")?, &usa, 1200.0, "USD", 1.00),
        Asset::phone("iPhone", "11", parse_date("2020-09-25")?, &spain, 990.0, "EUR", 10.12),
        Asset::computer("Lenovo", "Yoga 530", parse_date("2019-05-21")?, &usa, 1030.0, "USD", 1.00),
        Asset::phone("iPhone", "8", parse_date("2018-12-29")?, &spain, 970.0, "EUR", 10.12),
        Asset::computer("Lenovo", "Yoga 730", parse_date("2018-05-28")?, &usa, 835.0, "USD", 1.00),
        Asset::phone("Motorola", "Razr", parse_date("2020-03-16")?, &sweden, 970.0, "SEK", 8.45),
        Asset::computer("HP", "Elitebook", parse_date("2020-10-02")?, &sweden, 588.0, "SEK", 8.45),
    ])
}

#[must_use]
pub fn build_exchange_rates() -> Vec<ExchangeRate> {
    vec![
        ExchangeRate::new("USD", 1.00),
        ExchangeRate::new("SEK", 0.12),
        ExchangeRate::new("EUR", 1.21),
    ]
}
