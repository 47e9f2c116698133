//! Shared application state.

use anyhow::Context;
use schoolgate_cache::CacheConfig;
use schoolgate_engine::PermissionEngine;
use schoolgate_overrides::{HttpOverrideSource, OverrideSource, OverrideStoreConfig};
use schoolgate_policy::PolicyTable;
use std::env;

/// Route guard configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `LOGIN_PATH`: where unauthenticated requests are redirected
///   (default: `/login`)
/// - `FORBIDDEN_PATH`: where authenticated but unauthorized requests are
///   redirected (default: `/`)
#[derive(Clone, Debug)]
pub struct GuardConfig {
    pub login_path: String,
    pub forbidden_path: String,
}

impl GuardConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            login_path: env::var("LOGIN_PATH").unwrap_or_else(|_| "/login".into()),
            forbidden_path: env::var("FORBIDDEN_PATH").unwrap_or_else(|_| "/".into()),
        }
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".into(),
            forbidden_path: "/".into(),
        }
    }
}

/// Application state carried through axum routers.
pub struct AppState<S> {
    pub engine: PermissionEngine<S>,
    pub guard: GuardConfig,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            guard: self.guard.clone(),
        }
    }
}

impl<S: OverrideSource> AppState<S> {
    pub fn new(engine: PermissionEngine<S>, guard: GuardConfig) -> Self {
        Self { engine, guard }
    }
}

impl AppState<HttpOverrideSource> {
    /// Wire the full production stack from environment variables: built-in
    /// policy, HTTP override source, cache, and guard routes.
    pub fn from_env() -> anyhow::Result<Self> {
        let source = HttpOverrideSource::new(&OverrideStoreConfig::from_env())
            .context("failed to construct override HTTP client")?;
        let engine = PermissionEngine::new(PolicyTable::default(), source, CacheConfig::from_env());
        Ok(Self::new(engine, GuardConfig::from_env()))
    }
}
