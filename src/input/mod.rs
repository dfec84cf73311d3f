//! Fail-soft normalization of raw form input.
//!
//! Item forms hand the engine strings straight from text fields. Anything
//! unparsable becomes zero rather than an error: a half-typed price must
//! never poison the running totals. Negative entries are clamped to zero for
//! the same reason; [`crate::engine::validate_inputs`] is where such entries
//! get reported to the user.

use rust_decimal::Decimal;

/// Parse a currency amount. Empty or unparsable input yields zero,
/// negative input is clamped to zero.
pub fn parse_amount(raw: &str) -> Decimal {
    raw.trim()
        .parse::<Decimal>()
        .map(|d| d.max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO)
}

/// Parse a unit quantity. Same fail-soft policy as [`parse_amount`];
/// fractional entry is truncated to whole units.
pub fn parse_quantity(raw: &str) -> Decimal {
    parse_amount(raw).trunc()
}

/// Parse a percentage rate, accepting comma as the decimal separator
/// ("2,65" and "2.65" both parse to 2.65). Unparsable input yields zero.
pub fn parse_rate(raw: &str) -> Decimal {
    let normalized = raw.trim().replace(',', ".");
    normalized
        .parse::<Decimal>()
        .map(|d| d.max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amount_parses_plain_decimal() {
        assert_eq!(parse_amount("100000"), dec!(100_000));
        assert_eq!(parse_amount(" 1250.50 "), dec!(1250.50));
    }

    #[test]
    fn amount_fails_soft_to_zero() {
        assert_eq!(parse_amount(""), dec!(0));
        assert_eq!(parse_amount("abc"), dec!(0));
        assert_eq!(parse_amount("12a"), dec!(0));
    }

    #[test]
    fn amount_clamps_negative() {
        assert_eq!(parse_amount("-500"), dec!(0));
    }

    #[test]
    fn quantity_truncates_fraction() {
        assert_eq!(parse_quantity("3.9"), dec!(3));
        assert_eq!(parse_quantity("10"), dec!(10));
    }

    #[test]
    fn rate_accepts_comma_separator() {
        assert_eq!(parse_rate("2,65"), dec!(2.65));
        assert_eq!(parse_rate("2.65"), dec!(2.65));
        assert_eq!(parse_rate("0"), dec!(0));
    }

    #[test]
    fn rate_fails_soft_to_zero() {
        assert_eq!(parse_rate(""), dec!(0));
        assert_eq!(parse_rate("2,6,5"), dec!(0));
        assert_eq!(parse_rate("abc"), dec!(0));
    }
}
