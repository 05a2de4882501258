//! Formatting helpers for amounts and rates
//!
//! Amounts use New Zealand conventions: `,` groups thousands and `.`
//! separates cents.

use rust_decimal::Decimal;

/// Currency symbol options for formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySymbol {
    /// Include "$" prefix (New Zealand dollar)
    Nzd,
    /// No currency symbol
    None,
}

/// Core formatting function with full control over output.
///
/// # Arguments
/// * `value` - The decimal value to format
/// * `width` - Minimum width for padding (0 for no padding, right-aligned)
/// * `symbol` - Whether to include currency symbol
///
/// # Examples
/// ```
/// use call_rates::utils::{format_currency_with_width, CurrencySymbol};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(
///     format_currency_with_width(dec!(1234.56), 0, CurrencySymbol::Nzd),
///     "$1,234.56"
/// );
///
/// assert_eq!(
///     format_currency_with_width(dec!(1234), 12, CurrencySymbol::None),
///     "    1,234.00"
/// );
/// ```
pub fn format_currency_with_width(value: Decimal, width: usize, symbol: CurrencySymbol) -> String {
    let is_negative = value < Decimal::ZERO;
    let formatted = format!("{:.2}", value.abs());
    let (integer_part, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let sign = if is_negative { "-" } else { "" };
    let prefix = match symbol {
        CurrencySymbol::Nzd => "$",
        CurrencySymbol::None => "",
    };

    let result = format!("{}{}{}.{}", sign, prefix, grouped, cents);

    if width > 0 && result.len() < width {
        format!("{:>width$}", result, width = width)
    } else {
        result
    }
}

/// Format as New Zealand dollars: "$1,234.56"
///
/// # Examples
/// ```
/// use call_rates::utils::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(250000)), "$250,000.00");
/// assert_eq!(format_currency(dec!(-500)), "-$500.00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format_currency_with_width(value, 0, CurrencySymbol::Nzd)
}

/// Format a percentage rate without trailing zeros beyond two places:
/// `3` → "3.00%", `0.5025` → "0.5025%"
pub fn format_rate(value: Decimal) -> String {
    let normalized = value.normalize();
    if normalized.scale() < 2 {
        format!("{:.2}%", normalized)
    } else {
        format!("{}%", normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_basic() {
        assert_eq!(format_currency(dec!(1234.56)), "$1,234.56");
        assert_eq!(format_currency(dec!(0.99)), "$0.99");
        assert_eq!(format_currency(dec!(1000000)), "$1,000,000.00");
    }

    #[test]
    fn test_format_currency_small_values() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(1)), "$1.00");
        assert_eq!(format_currency(dec!(999.99)), "$999.99");
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(dec!(1000)), "$1,000.00");
        assert_eq!(format_currency(dec!(12345)), "$12,345.00");
        assert_eq!(format_currency(dec!(123456)), "$123,456.00");
        assert_eq!(format_currency(dec!(1234567)), "$1,234,567.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-1234.56)), "-$1,234.56");
        assert_eq!(format_currency(dec!(-0.01)), "-$0.01");
    }

    #[test]
    fn test_format_with_width() {
        let result = format_currency_with_width(dec!(100), 10, CurrencySymbol::Nzd);
        assert_eq!(result, "   $100.00");

        // already wider than requested
        let result = format_currency_with_width(dec!(1000000), 5, CurrencySymbol::None);
        assert_eq!(result, "1,000,000.00");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(dec!(3)), "3.00%");
        assert_eq!(format_rate(dec!(3.00)), "3.00%");
        assert_eq!(format_rate(dec!(0.8)), "0.80%");
        assert_eq!(format_rate(dec!(0.5025)), "0.5025%");
        assert_eq!(format_rate(dec!(-0.125)), "-0.125%");
    }
}
