//! Newsletter Handlers

pub(crate) mod subscribe;
pub(crate) mod unsubscribe;
