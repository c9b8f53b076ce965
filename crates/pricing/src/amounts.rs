//! Amount parsing
//!
//! Human-facing amounts ("5.00") become integer minor units at the
//! configuration boundary; everything downstream works in minor units only.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use thiserror::Error;

/// Errors from parsing human-facing amount strings.
#[derive(Debug, Error)]
pub enum AmountError {
    /// The string is not a non-negative decimal amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

/// Parse an amount string (e.g. "2.99") into minor units.
///
/// # Errors
///
/// Returns an error if the string cannot be parsed as a decimal, is
/// negative, or does not fit in minor units after scaling.
pub fn parse_amount(s: &str) -> Result<u64, AmountError> {
    let amount = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| AmountError::InvalidAmount(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(AmountError::InvalidAmount(s.to_string()));
    }

    amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_u64())
        .ok_or_else(|| AmountError::InvalidAmount(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_scales_to_minor_units() -> Result<(), AmountError> {
        assert_eq!(parse_amount("5.00")?, 500);
        assert_eq!(parse_amount("2.99")?, 299);
        assert_eq!(parse_amount("0")?, 0);

        Ok(())
    }

    #[test]
    fn parse_amount_rounds_sub_minor_digits() -> Result<(), AmountError> {
        assert_eq!(parse_amount("1.005")?, 101);
        assert_eq!(parse_amount("1.004")?, 100);

        Ok(())
    }

    #[test]
    fn parse_amount_handles_whitespace() -> Result<(), AmountError> {
        assert_eq!(parse_amount("  15.00  ")?, 1500);

        Ok(())
    }

    #[test]
    fn parse_amount_rejects_negative() {
        let result = parse_amount("-1.00");

        assert!(matches!(result, Err(AmountError::InvalidAmount(_))));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        let result = parse_amount("five quid");

        assert!(matches!(result, Err(AmountError::InvalidAmount(_))));
    }
}
