//! Order Repositories

mod checkouts;
mod orders;

pub(crate) use checkouts::PgCheckoutsRepository;
pub(crate) use orders::{NewOrderRow, PgOrdersRepository};
