//! # Schoolgate Models
//!
//! Domain models for the Schoolgate permission engine:
//!
//! - [`ids`]: strongly-typed ID newtypes
//! - [`roles`]: the closed role enumeration supplied by the authentication layer
//! - [`permissions`]: the four-boolean permission record and action enum
//! - [`subjects`]: the (role, identity) pair being authorized
//! - [`overrides`]: administrator-supplied override records and their wire shape

pub mod ids;
pub mod overrides;
pub mod permissions;
pub mod roles;
pub mod subjects;

pub use ids::UserId;
pub use overrides::{OverrideMap, OverrideScope, RawOverride};
pub use permissions::{Action, Permission};
pub use roles::Role;
pub use subjects::Subject;
