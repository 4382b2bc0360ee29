//! Money value extraction.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::patterns::MONEY_PATTERN;

/// Extract the first money value in `text`.
///
/// Only the leftmost money token is considered. The fractional part is
/// truncated, never rounded.
pub fn extract_money(text: &str) -> Option<u64> {
    let caps = MONEY_PATTERN.captures(text)?;
    parse_money(&caps[1])
}

/// Parse a money token such as `1,50,000` or `5,900.75` into whole units.
///
/// Values beyond `u64` saturate to `u64::MAX`.
pub fn parse_money(token: &str) -> Option<u64> {
    let digits = token.replace(',', "");
    match Decimal::from_str(&digits).ok().and_then(|d| d.trunc().to_u64()) {
        Some(value) => Some(value),
        None => digits.parse::<f64>().ok().map(|v| v.trunc() as u64),
    }
}

/// Money from `line`, falling back to `next_line`.
///
/// A zero value counts as no match on either line.
pub fn money_or_next(line: &str, next_line: &str) -> Option<u64> {
    nonzero_money(line).or_else(|| nonzero_money(next_line))
}

/// Money from `line` only, ignoring zero.
pub fn nonzero_money(line: &str) -> Option<u64> {
    extract_money(line).filter(|v| *v != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_money() {
        assert_eq!(extract_money("TOTAL PREMIUM 5900"), Some(5900));
        assert_eq!(extract_money("123,456.78"), Some(123456));
        assert_eq!(extract_money("IDV 100,000.99 ONLY"), Some(100000));
        assert_eq!(extract_money("no numbers here"), None);
    }

    #[test]
    fn test_extract_money_returns_first_not_largest() {
        assert_eq!(extract_money("CGST 450 ON 5000"), Some(450));
    }

    #[test]
    fn test_extract_money_truncates() {
        assert_eq!(extract_money("GST 899.99"), Some(899));
        assert_eq!(parse_money("100.5"), Some(100));
    }

    #[test]
    fn test_extract_money_ignores_short_numbers() {
        assert_eq!(extract_money("AGE 45 YEARS"), None);
        assert_eq!(extract_money("POLICY NO 12/34"), None);
    }

    #[test]
    fn test_indian_grouping_is_not_one_token() {
        assert_eq!(extract_money("1,23,456.78"), Some(456));
    }

    #[test]
    fn test_money_or_next_skips_zero() {
        assert_eq!(money_or_next("VEHICLE IDV", "150000"), Some(150000));
        assert_eq!(money_or_next("VEHICLE IDV 000", "150000"), Some(150000));
        assert_eq!(money_or_next("VEHICLE IDV 120000", "150000"), Some(120000));
        assert_eq!(money_or_next("VEHICLE IDV", ""), None);
        assert_eq!(nonzero_money("GST 000"), None);
    }

    #[test]
    fn test_oversized_token_saturates() {
        assert_eq!(extract_money("SUM INSURED 99999999999999999999"), Some(u64::MAX));
        assert_eq!(
            extract_money("IDV 123456789012345678901234567890"),
            Some(u64::MAX)
        );
        assert_eq!(parse_money("100.9999999999999999"), Some(100));
    }

    #[test]
    fn test_oversized_token_does_not_fall_back_to_next_line() {
        assert_eq!(money_or_next("TOTAL PREMIUM 99999999999999999999", "5900"), Some(u64::MAX));
    }
}
