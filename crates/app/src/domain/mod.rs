//! Bakeshop Domain Concerns

pub mod addresses;
pub mod carts;
pub mod newsletter;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod users;
