//! Amount parsing and display helpers. Money is exact decimal throughout;
//! display rounds to two places and appends the configured currency label.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Currency label the original house ledger used.
pub const DEFAULT_CURRENCY_LABEL: &str = "tk";

/// Parses a user-entered amount. Returns `None` for anything that is not a
/// plain decimal number; the caller decides whether that means an invalid
/// budget or a coerced zero.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    input.trim().parse::<Decimal>().ok()
}

/// Coerces free-form rate input to a non-negative decimal: non-numeric text
/// becomes zero, negative values clamp to zero.
pub fn coerce_rate_text(input: &str) -> Decimal {
    parse_amount(input).unwrap_or(Decimal::ZERO).max(Decimal::ZERO)
}

/// Renders an amount with two decimal places and the currency label,
/// e.g. `120.00 tk`.
pub fn format_amount(value: Decimal, label: &str) -> String {
    format!("{:.2} {}", value, label)
}

/// ISO calendar date, the only date format the ledger speaks.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_accepts_plain_decimals() {
        assert_eq!(parse_amount(" 120.50 "), Some(Decimal::new(12050, 2)));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn coerce_rate_text_maps_garbage_and_negatives_to_zero() {
        assert_eq!(coerce_rate_text("not-a-number"), Decimal::ZERO);
        assert_eq!(coerce_rate_text("-15"), Decimal::ZERO);
        assert_eq!(coerce_rate_text("75.5"), Decimal::new(755, 1));
    }

    #[test]
    fn format_amount_uses_two_places_and_label() {
        assert_eq!(format_amount(Decimal::from(120), "tk"), "120.00 tk");
        assert_eq!(format_amount(Decimal::new(305, 1), "tk"), "30.50 tk");
    }

    #[test]
    fn format_date_is_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
        assert_eq!(format_date(date), "2024-06-07");
    }
}
