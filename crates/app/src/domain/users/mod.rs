//! Users
//!
//! Authentication lives upstream; the storefront only ever sees an
//! already-resolved user principal.

pub mod models;
