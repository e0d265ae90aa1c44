use crate::system::Clock;
use crate::types::{Asset, ExchangeRate, Options, ReportData, ReportRow};

use super::age::{age_in_days, classify_age};
use super::convert::{convert_price, format_price, rate_for};

/// Build one report row per asset, in the order given.
#[must_use]
pub fn collect_report_data(
    assets: &[Asset],
    rates: &[ExchangeRate],
    opts: &Options,
    clock: &dyn Clock,
) -> ReportData {
    let as_of = clock.today();
    if opts.debug {
        eprintln!(
            "[debug] as_of={as_of} assets={} rates={}",
            assets.len(),
            rates.len()
        );
    }

    let rows = assets
        .iter()
        .map(|asset| {
            let rate = rate_for(&asset.currency, rates);
            let converted = convert_price(asset.purchase_price, rate);
            let age_days = age_in_days(asset.purchase_date, as_of);
            let level = classify_age(age_days);
            if opts.debug {
                eprintln!(
                    "[debug] asset={} {} currency={} rate={rate} age_days={age_days} \
                     level={level:?}",
                    asset.brand, asset.model, asset.currency
                );
            }
            ReportRow {
                kind: asset.kind,
                brand: asset.brand.clone(),
                model: asset.model.clone(),
                office: asset.office.name.clone(),
                purchase_date: asset.purchase_date,
                purchase_price: asset.purchase_price,
                currency: asset.currency.clone(),
                rate,
                converted_price: converted,
                converted_price_display: format_price(converted),
                age_days,
                level,
            }
        })
        .collect();

    ReportData { as_of, rows }
}
