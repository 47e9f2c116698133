//! Per-screen permission handle.

use schoolgate_engine::{PermissionEngine, ResolvedAccess};
use schoolgate_models::Subject;
use schoolgate_overrides::OverrideSource;

/// A screen's handle onto the engine, bound to one subject.
///
/// Wraps the facade in the shape screens consume: ask for a resource key,
/// get the four capability flags plus a loading marker.
///
/// # Example
///
/// ```rust,ignore
/// let handle = PermissionHandle::new(state.engine.clone(), subject);
/// let access = handle.check(keys::KEUANGAN_TAGIHAN).await;
/// if access.can_create {
///     // Show the "new invoice" form
/// }
/// ```
pub struct PermissionHandle<S> {
    engine: PermissionEngine<S>,
    subject: Option<Subject>,
}

impl<S> Clone for PermissionHandle<S> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            subject: self.subject,
        }
    }
}

impl<S: OverrideSource> PermissionHandle<S> {
    pub fn new(engine: PermissionEngine<S>, subject: Option<Subject>) -> Self {
        Self { engine, subject }
    }

    /// Resolve access to a resource key, awaiting the override map.
    pub async fn check(&self, key: &str) -> ResolvedAccess {
        self.engine.access(self.subject.as_ref(), key).await
    }

    /// Non-blocking resolution; `loading` is true until the subject's
    /// overrides arrive, with all four flags conservatively false.
    pub fn peek(&self, key: &str) -> ResolvedAccess {
        self.engine.peek_access(self.subject.as_ref(), key)
    }
}
