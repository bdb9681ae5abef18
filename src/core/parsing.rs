//! Text-to-number coercion at the input boundary.
//!
//! User inputs arrive as free text that may carry thousands separators.
//! Anything that does not start with a number, or yields a negative or
//! non-finite value, becomes zero. Nothing past this boundary has to deal
//! with malformed input.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("leading number pattern is valid")
});

/// Parse a user-entered amount into a non-negative finite number.
///
/// Commas are stripped before parsing and only the leading numeric prefix
/// is considered, so `"12abc"` reads as `12`.
///
/// ```rust
/// use airdrop_manager::core::parse_amount;
///
/// assert_eq!(parse_amount("1,234.5"), 1234.5);
/// assert_eq!(parse_amount(""), 0.0);
/// assert_eq!(parse_amount("abc"), 0.0);
/// ```
pub fn parse_amount(text: &str) -> f64 {
    let cleaned = text.replace(',', "");
    LEADING_NUMBER
        .find(cleaned.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_thousands_separators() {
        assert_eq!(parse_amount("1,234.5"), 1234.5);
        assert_eq!(parse_amount("10,000"), 10_000.0);
        assert_eq!(parse_amount("1,000,000"), 1_000_000.0);
    }

    #[test]
    fn empty_and_non_numeric_are_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("$500"), 0.0);
    }

    #[test]
    fn negative_values_coerce_to_zero() {
        assert_eq!(parse_amount("-5"), 0.0);
        assert_eq!(parse_amount("-1,000"), 0.0);
    }

    #[test]
    fn takes_leading_numeric_prefix() {
        assert_eq!(parse_amount("12abc"), 12.0);
        assert_eq!(parse_amount("  42 points"), 42.0);
        assert_eq!(parse_amount("3.5.6"), 3.5);
    }

    #[test]
    fn accepts_exponent_and_bare_fraction() {
        assert_eq!(parse_amount("3.5e9"), 3_500_000_000.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("+7"), 7.0);
    }

    #[test]
    fn overflowing_exponent_is_zero() {
        assert_eq!(parse_amount("1e999"), 0.0);
    }

    proptest! {
        #[test]
        fn result_is_always_finite_and_non_negative(text in ".{0,32}") {
            let value = parse_amount(&text);
            prop_assert!(value.is_finite());
            prop_assert!(value >= 0.0);
        }

        #[test]
        fn formatted_integers_parse_back(value in 0u64..1_000_000_000_000) {
            let digits = value.to_string();
            let grouped: String = digits
                .chars()
                .rev()
                .collect::<Vec<_>>()
                .chunks(3)
                .map(|chunk| chunk.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join(",")
                .chars()
                .rev()
                .collect();
            prop_assert_eq!(parse_amount(&grouped), value as f64);
        }
    }
}
