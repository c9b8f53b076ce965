//! Newsletter

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::NewsletterServiceError;
pub use service::*;
