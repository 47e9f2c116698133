//! Administrator-supplied permission overrides.
//!
//! Overrides are created through a separate management surface and are
//! read-only from the engine's perspective. A role-level override affects
//! every member of that role; a user-level override affects one subject only
//! and takes precedence over the role-level entry for the same key.

use schoolgate_core::ResourceKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::permissions::Permission;

/// Whether an override applies to a whole role or to one individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideScope {
    Role,
    User,
}

/// One override record as persisted by the management surface.
///
/// This is the wire shape returned by the override service: one record per
/// `(scope, resource_key)` pair with the four independent permission flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOverride {
    pub resource_key: ResourceKey,
    pub scope: OverrideScope,
    pub view: bool,
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
}

impl RawOverride {
    /// The permission value this record carries.
    pub fn permission(&self) -> Permission {
        Permission::new(self.view, self.create, self.edit, self.delete)
    }
}

/// The merged overrides applicable to one subject, user-level entries having
/// already replaced role-level entries on key collision.
pub type OverrideMap = HashMap<ResourceKey, Permission>;
