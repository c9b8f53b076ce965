//! Addresses

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::AddressesServiceError;
pub use service::*;

pub(crate) use repository::PgAddressesRepository;
