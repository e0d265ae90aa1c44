use std::rc::Rc;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Office {
    pub name: String,
}

impl Office {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    pub currency: String,
    pub rate: f64,
}

impl ExchangeRate {
    #[must_use]
    pub fn new(currency: &str, rate: f64) -> Self {
        Self {
            currency: currency.to_string(),
            rate,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum AssetKind {
    Computer,
    Phone,
}

impl AssetKind {
    /// Display name, also used as the primary key of the type sort.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Computer => "Computer",
            Self::Phone => "Phone",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Asset {
    pub kind: AssetKind,
    pub brand: String,
    pub model: String,
    pub purchase_date: NaiveDate,
    pub office: Rc<Office>,
    // Price in the asset's local `currency`
    pub purchase_price: f64,
    pub currency: String,
    // Stored with the asset but never read when reporting; rates come from the
    // separate exchange-rate list.
    pub exchange_rate: f64,
}

impl Asset {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        kind: AssetKind,
        brand: &str,
        model: &str,
        purchase_date: NaiveDate,
        office: &Rc<Office>,
        purchase_price: f64,
        currency: &str,
        exchange_rate: f64,
    ) -> Self {
        Self {
            kind,
            brand: brand.to_string(),
            model: model.to_string(),
            purchase_date,
            office: Rc::clone(office),
            purchase_price,
            currency: currency.to_string(),
            exchange_rate,
        }
    }

    #[must_use]
    pub fn computer(
        brand: &str,
        model: &str,
        purchase_date: NaiveDate,
        office: &Rc<Office>,
        purchase_price: f64,
        currency: &str,
        exchange_rate: f64,
    ) -> Self {
        Self::new(
            AssetKind::Computer,
            brand,
            model,
            purchase_date,
            office,
            purchase_price,
            currency,
            exchange_rate,
        )
    }

    #[must_use]
    pub fn phone(
        brand: &str,
        model: &str,
        purchase_date: NaiveDate,
        office: &Rc<Office>,
        purchase_price: f64,
        currency: &str,
        exchange_rate: f64,
    ) -> Self {
        Self::new(
            AssetKind::Phone,
            brand,
            model,
            purchase_date,
            office,
            purchase_price,
            currency,
            exchange_rate,
        )
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeLevel {
    Normal,
    Warning,
    Alarm,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub kind: AssetKind,
    pub brand: String,
    pub model: String,
    pub office: String,
    pub purchase_date: NaiveDate,
    pub purchase_price: f64,
    pub currency: String,
    // Rate found in the lookup list; 0.0 when the currency has no entry
    pub rate: f64,
    // Serializes as null when the rate was 0
    pub converted_price: f64,
    pub converted_price_display: String,
    pub age_days: i64,
    pub level: AgeLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub as_of: NaiveDate,
    pub rows: Vec<ReportRow>,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum SortOrder {
    /// Office name, then purchase date
    #[default]
    Office,
    /// Asset type, then purchase date
    Type,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum DateStyle {
    /// 2019-06-01
    #[default]
    Iso,
    /// 6/1/2019
    Us,
}

impl DateStyle {
    #[must_use]
    pub fn format(self, date: NaiveDate) -> String {
        match self {
            Self::Iso => date.format("%Y-%m-%d").to_string(),
            Self::Us => date.format("%-m/%-d/%Y").to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub sort: SortOrder,
    pub date_style: DateStyle,
    pub color: bool,
    pub debug: bool,
}
