//! Product Repositories

mod categories;
mod products;

pub(crate) use categories::PgCategoriesRepository;
pub(crate) use products::PgProductsRepository;
