//! Policy configuration
//!
//! Pricing rules are operator-supplied YAML; this module parses that file
//! into a [`StandardPolicy`]. Amounts are written as human-facing strings
//! ("5.00") and percentages as either "10%" or "0.10".

use std::{fs, path::Path};

use decimal_percentage::Percentage;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    amounts::{AmountError, parse_amount},
    policy::{DiscountTier, StandardPolicy},
};

/// Errors from loading a pricing configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file
    #[error("failed to read pricing config: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse pricing config: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid amount format
    #[error(transparent)]
    InvalidAmount(#[from] AmountError),

    /// Invalid percentage format
    #[error("invalid percentage: {0}")]
    InvalidPercentage(String),
}

/// Root of the pricing configuration file.
#[derive(Debug, Deserialize)]
pub struct PricingConfig {
    /// Shipping rules.
    pub shipping: ShippingConfig,

    /// Discount tiers; may be empty.
    #[serde(default)]
    pub discounts: Vec<DiscountTierConfig>,
}

/// Shipping section of the configuration file.
#[derive(Debug, Deserialize)]
pub struct ShippingConfig {
    /// Flat rate charged per order (e.g. "5.00").
    pub flat: String,

    /// Subtotal at which shipping becomes free, when present.
    #[serde(default)]
    pub free_over: Option<String>,
}

/// One discount tier in the configuration file.
#[derive(Debug, Deserialize)]
pub struct DiscountTierConfig {
    /// Smallest qualifying subtotal (e.g. "50.00").
    pub over: String,

    /// Discount fraction (e.g. "10%" or "0.10").
    pub percent: String,
}

impl PricingConfig {
    /// Parse a configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_yaml(&fs::read_to_string(path)?)
    }

    /// Build the policy this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns an error if any amount or percentage string is invalid.
    pub fn into_policy(self) -> Result<StandardPolicy, ConfigError> {
        let flat = parse_amount(&self.shipping.flat)?;

        let free_over = self
            .shipping
            .free_over
            .as_deref()
            .map(parse_amount)
            .transpose()?;

        let tiers = self
            .discounts
            .into_iter()
            .map(|tier| {
                Ok(DiscountTier {
                    min_subtotal: parse_amount(&tier.over)?,
                    percent: parse_percentage(&tier.percent)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(StandardPolicy::new(flat, free_over, tiers))
    }
}

/// Parse a percentage string ("15%" or "0.15") into a `Percentage`.
///
/// # Errors
///
/// Returns an error if the string cannot be parsed.
pub fn parse_percentage(s: &str) -> Result<Percentage, ConfigError> {
    let trimmed = s.trim();

    if let Some(percent_str) = trimmed.strip_suffix('%') {
        let value = percent_str
            .trim()
            .parse::<f64>()
            .map_err(|_err| ConfigError::InvalidPercentage(s.to_string()))?;

        Ok(Percentage::from(value / 100.0))
    } else {
        let value = trimmed
            .parse::<f64>()
            .map_err(|_err| ConfigError::InvalidPercentage(s.to_string()))?;

        Ok(Percentage::from(value))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use testresult::TestResult;

    use crate::policy::PricingPolicy;

    use super::*;

    const EXAMPLE: &str = "
shipping:
  flat: \"5.00\"
  free_over: \"80.00\"
discounts:
  - over: \"50.00\"
    percent: \"10%\"
";

    #[test]
    fn parses_full_config() -> TestResult {
        let policy = PricingConfig::from_yaml(EXAMPLE)?.into_policy()?;

        assert_eq!(policy.quote(24_00)?.shipping, 5_00);
        assert_eq!(policy.quote(80_00)?.shipping, 0);
        assert_eq!(policy.quote(60_00)?.discount, 6_00);

        Ok(())
    }

    #[test]
    fn discounts_section_is_optional() -> TestResult {
        let policy = PricingConfig::from_yaml("shipping:\n  flat: \"2.50\"\n")?.into_policy()?;

        assert_eq!(policy.quote(100_00)?.discount, 0);
        assert_eq!(policy.quote(100_00)?.shipping, 2_50);

        Ok(())
    }

    #[test]
    fn rejects_bad_amount() -> TestResult {
        let config = PricingConfig::from_yaml("shipping:\n  flat: \"cheap\"\n")?;
        let result = config.into_policy();

        assert!(matches!(result, Err(ConfigError::InvalidAmount(_))));

        Ok(())
    }

    #[test]
    fn rejects_bad_percentage() -> TestResult {
        let config = PricingConfig::from_yaml(
            "shipping:\n  flat: \"5.00\"\ndiscounts:\n  - over: \"50.00\"\n    percent: \"lots\"\n",
        )?;
        let result = config.into_policy();

        assert!(matches!(result, Err(ConfigError::InvalidPercentage(_))));

        Ok(())
    }

    #[test]
    fn loads_from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(EXAMPLE.as_bytes())?;

        let policy = PricingConfig::load(file.path())?.into_policy()?;

        assert_eq!(policy.quote(60_00)?.discount, 6_00);

        Ok(())
    }

    #[test]
    fn parse_percentage_accepts_both_formats() -> TestResult {
        assert_eq!(parse_percentage("15%")?, Percentage::from(0.15));
        assert_eq!(parse_percentage("0.15")?, Percentage::from(0.15));
        assert_eq!(parse_percentage("  100%  ")?, Percentage::from(1.0));

        Ok(())
    }

    #[test]
    fn parse_percentage_rejects_invalid_format() {
        let result = parse_percentage("invalid");

        assert!(matches!(result, Err(ConfigError::InvalidPercentage(_))));
    }
}
