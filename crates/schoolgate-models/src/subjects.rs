//! The subject being authorized.

use crate::ids::UserId;
use crate::roles::Role;
use serde::{Deserialize, Serialize};

/// The (role, individual identity) pair being authorized.
///
/// Supplied by the authentication layer after a successful login. An
/// unauthenticated caller is represented as `Option<Subject>::None` and
/// resolves everything to no access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subject {
    pub role: Role,
    pub user_id: UserId,
}

impl Subject {
    pub const fn new(role: Role, user_id: UserId) -> Self {
        Self { role, user_id }
    }
}
