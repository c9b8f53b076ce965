//! Shopper identity

pub(crate) mod middleware;
