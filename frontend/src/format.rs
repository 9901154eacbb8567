//! Display formatting helpers.

use num_format::{Locale, ToFormattedString};

/// Formats a price for display: thousands separators on the integer part,
/// always two decimals. Negative prices never occur (validated at entry),
/// but are rendered sanely anyway.
pub fn format_price(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let whole = (cents / 100).abs().to_formatted_string(&Locale::en);
    format!("{}${}.{:02}", sign, whole, (cents % 100).abs())
}

/// Formats a footprint for display: one decimal, with the unit.
pub fn format_impact(kg: f64) -> String {
    format!("{:.1} kg CO₂", kg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_get_separators_and_two_decimals() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(1299.999), "$1,300.00");
        assert_eq!(format_price(1234567.89), "$1,234,567.89");
    }

    #[test]
    fn impact_uses_one_decimal() {
        assert_eq!(format_impact(3.0), "3.0 kg CO₂");
        assert_eq!(format_impact(0.26), "0.3 kg CO₂");
    }
}
