//! The closed role enumeration.
//!
//! Roles are immutable and supplied by the authentication layer; the engine
//! never creates or mutates them. An unrecognized role string is an error at
//! the application boundary, never a silent grant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of subject being authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access by default, independent of the policy table.
    Admin,
    Principal,
    Teacher,
    Student,
    Parent,
    FinanceOfficer,
    Staff,
}

impl Role {
    /// All roles, in privilege order from most to least.
    pub const ALL: [Role; 7] = [
        Role::Admin,
        Role::Principal,
        Role::FinanceOfficer,
        Role::Staff,
        Role::Teacher,
        Role::Parent,
        Role::Student,
    ];

    /// The canonical snake_case name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Principal => "principal",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Parent => "parent",
            Role::FinanceOfficer => "finance_officer",
            Role::Staff => "staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized role name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(pub String);

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "principal" => Ok(Role::Principal),
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            "parent" => Ok(Role::Parent),
            "finance_officer" => Ok(Role::FinanceOfficer),
            "staff" => Ok(Role::Staff),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}
