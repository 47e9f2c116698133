//! # Schoolgate Engine
//!
//! The single entry point for permission resolution. Combines the built-in
//! default policy with administrator overrides fetched through the coalescing
//! cache:
//!
//! 1. If the subject's override map contains the resource key, that
//!    permission IS the answer. The override replaces the default whole;
//!    fields are never merged between the two.
//! 2. Otherwise the default policy table decides.
//! 3. No subject (unauthenticated) resolves to no access, everywhere.
//!
//! While the subject's override map is still loading, the synchronous
//! [`PermissionEngine::peek`] reports `loading: true` with a conservative
//! all-false permission, so consumers never flash unauthorized content.
//!
//! No failure mode escapes this facade: fetch errors degrade to "no
//! overrides" inside the cache, and everything else is pure.
//!
//! Overrides apply to Admin exactly like to any other role: the implicit
//! universal Admin rule is a default, and an explicit override for an Admin
//! subject can reduce it.

use schoolgate_cache::{CacheConfig, OverrideCache};
use schoolgate_models::{Action, Permission, Subject};
use schoolgate_overrides::OverrideSource;
use schoolgate_policy::PolicyTable;
use std::sync::Arc;
use tracing::trace;

/// A resolution answer together with its loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub permission: Permission,
    /// True while the subject's override map has not been fetched yet. The
    /// permission is all-false in that state.
    pub loading: bool,
}

impl Resolution {
    const LOADING: Resolution = Resolution {
        permission: Permission::NONE,
        loading: true,
    };

    fn ready(permission: Permission) -> Self {
        Self {
            permission,
            loading: false,
        }
    }
}

/// Per-action view of a resolution, shaped for screen consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAccess {
    pub can_view: bool,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub loading: bool,
}

impl From<Resolution> for ResolvedAccess {
    fn from(resolution: Resolution) -> Self {
        let p = resolution.permission;
        Self {
            can_view: p.view,
            can_create: p.create,
            can_edit: p.edit,
            can_delete: p.delete,
            loading: resolution.loading,
        }
    }
}

/// The permission resolution facade.
///
/// Cheap to clone; all clones share the policy table and the cache.
pub struct PermissionEngine<S> {
    policy: Arc<PolicyTable>,
    cache: OverrideCache<S>,
}

impl<S> Clone for PermissionEngine<S> {
    fn clone(&self) -> Self {
        Self {
            policy: self.policy.clone(),
            cache: self.cache.clone(),
        }
    }
}

impl<S: OverrideSource> PermissionEngine<S> {
    pub fn new(policy: PolicyTable, source: S, config: CacheConfig) -> Self {
        Self {
            policy: Arc::new(policy),
            cache: OverrideCache::new(source, config),
        }
    }

    /// Resolve the final permission for a subject on a resource key,
    /// awaiting the override map if it is not cached yet.
    pub async fn resolve(&self, subject: Option<&Subject>, key: &str) -> Permission {
        let Some(subject) = subject else {
            return Permission::NONE;
        };
        let overrides = self.cache.get(subject).await;
        let permission = match overrides.get(key) {
            Some(overridden) => *overridden,
            None => self.policy.resolve(subject.role, key),
        };
        trace!(role = %subject.role, resource = key, ?permission, "Resolved permission");
        permission
    }

    /// Non-blocking resolution with an explicit loading state.
    ///
    /// While the subject's overrides are in flight the answer is a
    /// conservative all-false with `loading: true`; the call itself triggers
    /// the fetch.
    pub fn peek(&self, subject: Option<&Subject>, key: &str) -> Resolution {
        let Some(subject) = subject else {
            return Resolution::ready(Permission::NONE);
        };
        match self.cache.peek(subject) {
            Some(overrides) => {
                let permission = match overrides.get(key) {
                    Some(overridden) => *overridden,
                    None => self.policy.resolve(subject.role, key),
                };
                Resolution::ready(permission)
            }
            None => Resolution::LOADING,
        }
    }

    /// Resolve and check one action in a single call.
    pub async fn allows(&self, subject: Option<&Subject>, key: &str, action: Action) -> bool {
        self.resolve(subject, key).await.allows(action)
    }

    /// Screen-shaped resolution: the four flags plus the loading marker
    /// (always false here, since the call awaits the override map).
    pub async fn access(&self, subject: Option<&Subject>, key: &str) -> ResolvedAccess {
        Resolution::ready(self.resolve(subject, key).await).into()
    }

    /// Screen-shaped non-blocking resolution.
    pub fn peek_access(&self, subject: Option<&Subject>, key: &str) -> ResolvedAccess {
        self.peek(subject, key).into()
    }

    /// Drop all cached override maps; every later resolution refetches.
    ///
    /// Wired to the application's "overrides changed" broadcast by the
    /// enforcement layer.
    pub fn invalidate(&self) {
        self.cache.invalidate();
    }
}
