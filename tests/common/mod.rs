use schoolgate::{
    OverrideFetchError, OverrideScope, OverrideSource, Permission, RawOverride, ResourceKey, Role,
    Subject, UserId,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Well-known test user IDs.
#[allow(dead_code)]
pub mod users {
    use schoolgate::UserId;
    pub const TEACHER_X: UserId = UserId::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0011);
    pub const TEACHER_Y: UserId = UserId::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0012);
    pub const STUDENT_A: UserId = UserId::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0021);
    pub const ADMIN: UserId = UserId::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0001);
}

/// Who an override row is persisted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Role(Role),
    User(UserId),
}

/// In-memory stand-in for the override service: rows are stored per owner
/// and a fetch returns the subset applicable to the subject, exactly like
/// the real endpoint.
#[derive(Clone)]
pub struct MockOverrideStore {
    rows: Arc<Mutex<Vec<(Owner, RawOverride)>>>,
    calls: Arc<AtomicUsize>,
    fail: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockOverrideStore {
    pub fn empty() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<(Owner, RawOverride)>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            calls: Arc::new(AtomicUsize::new(0)),
            fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn replace_rows(&self, rows: Vec<(Owner, RawOverride)>) {
        *self.rows.lock().unwrap() = rows;
    }
}

impl OverrideSource for MockOverrideStore {
    async fn fetch(&self, subject: &Subject) -> Result<Vec<RawOverride>, OverrideFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            let err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
            return Err(OverrideFetchError::Decode(err));
        }
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|(owner, _)| match owner {
                Owner::Role(role) => *role == subject.role,
                Owner::User(user_id) => *user_id == subject.user_id,
            })
            .map(|(_, record)| record.clone())
            .collect())
    }
}

/// A role-level override row.
#[allow(dead_code)]
pub fn role_override(role: Role, key: &str, permission: Permission) -> (Owner, RawOverride) {
    (
        Owner::Role(role),
        RawOverride {
            resource_key: ResourceKey::new(key),
            scope: OverrideScope::Role,
            view: permission.view,
            create: permission.create,
            edit: permission.edit,
            delete: permission.delete,
        },
    )
}

/// A user-level override row.
#[allow(dead_code)]
pub fn user_override(user_id: UserId, key: &str, permission: Permission) -> (Owner, RawOverride) {
    (
        Owner::User(user_id),
        RawOverride {
            resource_key: ResourceKey::new(key),
            scope: OverrideScope::User,
            view: permission.view,
            create: permission.create,
            edit: permission.edit,
            delete: permission.delete,
        },
    )
}
