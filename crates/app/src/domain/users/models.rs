//! User Models

use crate::uuids::TypedUuid;

/// Marker for user-scoped identifiers. There is no users table; the
/// principal arrives from the upstream gateway.
pub struct User;

/// User UUID
pub type UserUuid = TypedUuid<User>;
