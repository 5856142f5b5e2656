//! Conversion of raw amount text into a number.
//!
//! The number input hands the form free text. `coerce_amount` converts it the
//! way a browser number conversion does, and `AmountPolicy` decides whether a
//! result that is not a finite number may enter the store.

use serde::{Deserialize, Serialize};

use crate::error::EntryError;

/// How the entry form treats amount text that does not convert to a finite number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountPolicy {
    /// Reject with `EntryError::InvalidAmount`; the drafts stay as typed
    #[default]
    Strict,
    /// Store whatever the conversion produces, NaN included
    Permissive,
}

impl AmountPolicy {
    pub fn parse(&self, text: &str) -> Result<f64, EntryError> {
        match self {
            AmountPolicy::Permissive => Ok(coerce_amount(text)),
            AmountPolicy::Strict => {
                if text.trim().is_empty() {
                    return Err(EntryError::InvalidAmount(text.to_string()));
                }
                let amount = coerce_amount(text);
                if amount.is_finite() {
                    Ok(amount)
                } else {
                    Err(EntryError::InvalidAmount(text.to_string()))
                }
            }
        }
    }
}

/// Convert text to a number, yielding NaN instead of failing.
///
/// Surrounding whitespace is ignored and blank text converts to 0. Accepts
/// signed decimal literals with an optional exponent (`12.`, `.5`, `1e3`),
/// unsigned `0x`/`0o`/`0b` integer literals and the words `Infinity`,
/// `+Infinity` and `-Infinity`.
pub fn coerce_amount(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    // f64::from_str also accepts "inf" and "nan" spellings, which must stay NaN here
    let is_decimal_literal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal_literal {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let prefix = text.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    Some(
        u128::from_str_radix(digits, radix)
            .ok()
            .filter(|_| !digits.starts_with('+'))
            .map(|value| value as f64)
            .unwrap_or(f64::NAN),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_plain_numbers() {
        assert_eq!(coerce_amount("200"), 200.0);
        assert_eq!(coerce_amount("12.50"), 12.5);
        assert_eq!(coerce_amount("-3"), -3.0);
        assert_eq!(coerce_amount("+7"), 7.0);
        assert_eq!(coerce_amount("1e3"), 1000.0);
    }

    #[test]
    fn test_coerce_partial_decimals() {
        assert_eq!(coerce_amount("12."), 12.0);
        assert_eq!(coerce_amount(".5"), 0.5);
    }

    #[test]
    fn test_coerce_ignores_surrounding_whitespace() {
        assert_eq!(coerce_amount("  42 "), 42.0);
        assert_eq!(coerce_amount("   "), 0.0);
        assert_eq!(coerce_amount(""), 0.0);
    }

    #[test]
    fn test_coerce_radix_literals() {
        assert_eq!(coerce_amount("0x10"), 16.0);
        assert_eq!(coerce_amount("0b101"), 5.0);
        assert_eq!(coerce_amount("0o17"), 15.0);
        assert!(coerce_amount("0x").is_nan());
        assert!(coerce_amount("0xZZ").is_nan());
    }

    #[test]
    fn test_coerce_malformed_text_is_nan() {
        assert!(coerce_amount("abc").is_nan());
        assert!(coerce_amount("12abc").is_nan());
        assert!(coerce_amount("1,000").is_nan());
        assert!(coerce_amount("$5").is_nan());
        assert!(coerce_amount(".").is_nan());
        assert!(coerce_amount("1e").is_nan());
    }

    #[test]
    fn test_coerce_rejects_rust_only_spellings() {
        assert!(coerce_amount("inf").is_nan());
        assert!(coerce_amount("nan").is_nan());
        assert!(coerce_amount("infinity").is_nan());
        assert_eq!(coerce_amount("Infinity"), f64::INFINITY);
        assert_eq!(coerce_amount("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_strict_policy() {
        let policy = AmountPolicy::Strict;

        assert_eq!(policy.parse("200").unwrap(), 200.0);
        assert_eq!(policy.parse(" 3.5 ").unwrap(), 3.5);
        assert!(matches!(policy.parse("abc"), Err(EntryError::InvalidAmount(text)) if text == "abc"));
        assert!(policy.parse("   ").is_err());
        assert!(policy.parse("Infinity").is_err());
    }

    #[test]
    fn test_permissive_policy() {
        let policy = AmountPolicy::Permissive;

        assert_eq!(policy.parse("200").unwrap(), 200.0);
        assert_eq!(policy.parse("   ").unwrap(), 0.0);
        assert!(policy.parse("abc").unwrap().is_nan());
    }

    #[test]
    fn test_policy_defaults_to_strict() {
        assert_eq!(AmountPolicy::default(), AmountPolicy::Strict);
    }
}
