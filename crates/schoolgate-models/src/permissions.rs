//! The four-boolean permission record.
//!
//! The four fields are fully independent: `edit` does not imply `view`, and
//! no field is ever derived from another. When no rule applies anywhere, the
//! answer is [`Permission::NONE`] (default-deny).

use serde::{Deserialize, Serialize};

/// View/create/edit/delete rights on one resource key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Permission {
    pub view: bool,
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
}

impl Permission {
    /// No access at all. This is also the `Default`.
    pub const NONE: Permission = Permission::new(false, false, false, false);

    /// Full access to all four actions.
    pub const FULL: Permission = Permission::new(true, true, true, true);

    /// View-only access.
    pub const VIEW: Permission = Permission::new(true, false, false, false);

    pub const fn new(view: bool, create: bool, edit: bool, delete: bool) -> Self {
        Self {
            view,
            create,
            edit,
            delete,
        }
    }

    /// Whether this permission grants the given action.
    pub const fn allows(&self, action: Action) -> bool {
        match action {
            Action::View => self.view,
            Action::Create => self.create,
            Action::Edit => self.edit,
            Action::Delete => self.delete,
        }
    }
}

/// One of the four protected actions on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
}
