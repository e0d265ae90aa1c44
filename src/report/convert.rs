use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::ExchangeRate;

/// Rate of the first entry matching `currency`, or `0.0` when none does.
#[must_use]
pub fn rate_for(currency: &str, rates: &[ExchangeRate]) -> f64 {
    rates
        .iter()
        .find(|r| r.currency == currency)
        .map_or(0.0, |r| r.rate)
}

/// Local price expressed in the reference currency. A zero rate is divided
/// through as-is and yields `inf` (or `NaN` for a zero price).
#[must_use]
pub fn convert_price(price: f64, rate: f64) -> f64 {
    price / rate
}

/// At most two decimals, without trailing zeros. The value is first taken to
/// 15 significant digits, then rounded half away from zero, so `1.005`
/// prints as `1.01`.
#[must_use]
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let Ok(decimal) = Decimal::from_scientific(&format!("{value:.14e}")) else {
        // Outside Decimal's range: either far below a cent or already integral.
        if value.abs() < 0.005 {
            return "0".to_string();
        }
        return value.to_string();
    };
    let rounded = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // avoid "-0"
        return "0".to_string();
    }
    rounded.normalize().to_string()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::catalog::build_exchange_rates;

    #[test]
    fn usd_price_converts_to_itself() {
        let rates = build_exchange_rates();
        let rate = rate_for("USD", &rates);
        assert_eq!(format_price(convert_price(1200.0, rate)), "1200");
    }

    #[test]
    fn sek_price_divides_by_rate() {
        let rates = build_exchange_rates();
        let rate = rate_for("SEK", &rates);
        assert_eq!(format_price(convert_price(970.0, rate)), "8083.33");
    }

    #[test]
    fn missing_currency_divides_by_zero() {
        let rates = build_exchange_rates();
        let rate = rate_for("NOK", &rates);
        assert_eq!(rate, 0.0);

        let converted = convert_price(1200.0, rate);
        assert!(converted.is_infinite() && converted.is_sign_positive());
        assert_eq!(format_price(converted), "inf");
        assert_eq!(format_price(convert_price(0.0, rate)), "NaN");
    }

    #[test]
    fn rate_lookup_takes_first_match() {
        let rates = vec![ExchangeRate::new("EUR", 1.21), ExchangeRate::new("EUR", 9.0)];
        assert_eq!(rate_for("EUR", &rates), 1.21);
        assert_eq!(rate_for("eur", &rates), 0.0);
    }

    #[test]
    fn format_price_trims_and_rounds() {
        assert_eq!(format_price(1423.0), "1423");
        assert_eq!(format_price(1176.033_057_851), "1176.03");
        assert_eq!(format_price(818.181_818), "818.18");
        assert_eq!(format_price(2.5), "2.5");
        assert_eq!(format_price(0.125), "0.13");
        assert_eq!(format_price(-0.001), "0");
        assert_eq!(format_price(-12.345_6), "-12.35");
    }

    #[test]
    fn format_price_rounds_decimal_midpoints_up() {
        assert_eq!(format_price(1.005), "1.01");
        assert_eq!(format_price(0.285), "0.29");
        assert_eq!(format_price(2.675), "2.68");
        assert_eq!(format_price(-1.005), "-1.01");
    }

    #[test]
    fn format_price_keeps_huge_and_tiny_values_finite() {
        let huge = f64::MAX / 10.0;
        let out = format_price(huge);
        assert_ne!(out, "inf");
        assert!(out.starts_with("17976931348623"), "{out}");
        assert!(out.chars().all(|c| c.is_ascii_digit()), "{out}");

        assert_eq!(format_price(1e20), "100000000000000000000");
        assert_eq!(format_price(1e-30), "0");
        assert_eq!(format_price(-1e-30), "0");
    }
}
