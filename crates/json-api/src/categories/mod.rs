//! Categories

mod handlers;

pub(crate) use handlers::*;
