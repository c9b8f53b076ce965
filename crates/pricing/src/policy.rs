//! Pricing policy
//!
//! A [`PricingPolicy`] turns a cart subtotal into the shipping and discount
//! amounts for an order. Policies are pure: the same subtotal always yields
//! the same quote, and each amount is computed exactly once per quote.

use std::fmt::Debug;

use decimal_percentage::Percentage;
use thiserror::Error;

use crate::discounts::{DiscountError, percent_of_minor};

/// Errors from evaluating a pricing policy.
#[derive(Debug, Error)]
pub enum PricingError {
    /// A percentage discount could not be computed safely.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Adding shipping to the discounted subtotal overflowed.
    #[error("order total overflowed")]
    TotalOverflow,
}

/// The complete price breakdown for an order.
///
/// `total = subtotal - discount + shipping`, with the discount clamped to
/// the subtotal so the result can never go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// Sum of line totals, in minor units.
    pub subtotal: u64,

    /// Shipping charged on the order, in minor units.
    pub shipping: u64,

    /// Discount applied to the subtotal, in minor units.
    pub discount: u64,

    /// Amount due, in minor units.
    pub total: u64,
}

/// Shipping and discount rules applied to a cart subtotal.
pub trait PricingPolicy: Debug + Send + Sync {
    /// Shipping charged for an order with the given subtotal.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount cannot be computed safely.
    fn shipping(&self, subtotal: u64) -> Result<u64, PricingError>;

    /// Discount granted for an order with the given subtotal.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount cannot be computed safely.
    fn discount(&self, subtotal: u64) -> Result<u64, PricingError>;

    /// Evaluate the full price breakdown for the given subtotal.
    ///
    /// # Errors
    ///
    /// Returns an error when either component amount fails, or when the
    /// total overflows.
    fn quote(&self, subtotal: u64) -> Result<Quote, PricingError> {
        let shipping = self.shipping(subtotal)?;
        let discount = self.discount(subtotal)?.min(subtotal);

        let total = (subtotal - discount)
            .checked_add(shipping)
            .ok_or(PricingError::TotalOverflow)?;

        Ok(Quote {
            subtotal,
            shipping,
            discount,
            total,
        })
    }
}

/// A discount tier: orders at or above `min_subtotal` qualify for
/// `percent` off. The highest qualifying tier wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountTier {
    /// Smallest subtotal, in minor units, that qualifies for this tier.
    pub min_subtotal: u64,

    /// Fraction of the subtotal taken off (0.1 is 10%).
    pub percent: Percentage,
}

/// The storefront's standard policy: flat-rate shipping with an optional
/// free-shipping threshold, and percentage discount tiers keyed by minimum
/// subtotal.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardPolicy {
    flat_shipping: u64,
    free_shipping_over: Option<u64>,
    tiers: Vec<DiscountTier>,
}

impl StandardPolicy {
    /// Build a policy from its parts. Tiers are kept sorted by threshold so
    /// lookup can take the last qualifying entry.
    pub fn new(
        flat_shipping: u64,
        free_shipping_over: Option<u64>,
        mut tiers: Vec<DiscountTier>,
    ) -> Self {
        tiers.sort_by_key(|tier| tier.min_subtotal);

        Self {
            flat_shipping,
            free_shipping_over,
            tiers,
        }
    }

    fn qualifying_tier(&self, subtotal: u64) -> Option<&DiscountTier> {
        self.tiers
            .iter()
            .rev()
            .find(|tier| subtotal >= tier.min_subtotal)
    }
}

impl Default for StandardPolicy {
    /// Flat 5.00 shipping, no free-shipping threshold, 10% off orders of
    /// 50.00 or more.
    fn default() -> Self {
        Self::new(
            5_00,
            None,
            vec![DiscountTier {
                min_subtotal: 50_00,
                percent: Percentage::from(0.1),
            }],
        )
    }
}

impl PricingPolicy for StandardPolicy {
    fn shipping(&self, subtotal: u64) -> Result<u64, PricingError> {
        match self.free_shipping_over {
            Some(threshold) if subtotal >= threshold => Ok(0),
            _ => Ok(self.flat_shipping),
        }
    }

    fn discount(&self, subtotal: u64) -> Result<u64, PricingError> {
        match self.qualifying_tier(subtotal) {
            Some(tier) => Ok(percent_of_minor(&tier.percent, subtotal)?),
            None => Ok(0),
        }
    }
}
