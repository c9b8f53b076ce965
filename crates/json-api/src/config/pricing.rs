//! Pricing Config

use std::path::PathBuf;

use clap::Args;
use uuid::Uuid;

use bakeshop::{
    StandardPolicy,
    config::{ConfigError, PricingConfig},
};
use bakeshop_app::domain::users::models::UserUuid;

/// Pricing policy and checkout ownership settings.
#[derive(Debug, Args)]
pub struct PricingSettings {
    /// Path to a YAML pricing policy file. Omit for the built-in defaults.
    #[arg(long, env = "PRICING_CONFIG")]
    pub pricing_config: Option<PathBuf>,

    /// User that owns carts detached at checkout.
    #[arg(long, env = "BAKESHOP_SYSTEM_OWNER_UUID")]
    pub system_owner_uuid: Uuid,
}

impl PricingSettings {
    /// Build the pricing policy, reading the YAML file when one is configured.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured file cannot be read or parsed.
    pub fn policy(&self) -> Result<StandardPolicy, ConfigError> {
        match &self.pricing_config {
            Some(path) => PricingConfig::load(path)?.into_policy(),
            None => Ok(StandardPolicy::default()),
        }
    }

    /// The configured system owner principal.
    #[must_use]
    pub fn system_owner(&self) -> UserUuid {
        UserUuid::from_uuid(self.system_owner_uuid)
    }
}
