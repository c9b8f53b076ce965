//! Bakeshop
//!
//! Order pricing for the bakeshop storefront: shipping and discount policy
//! applied to cart subtotals, with all amounts held in integer minor units.

pub mod amounts;
pub mod config;
pub mod discounts;
pub mod policy;

pub use policy::{PricingError, PricingPolicy, Quote, StandardPolicy};
