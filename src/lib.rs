//! # Schoolgate
//!
//! Enforcement adapters and application wiring for the Schoolgate permission
//! engine. The engine itself lives in the workspace crates; this crate is
//! the surface the application consumes:
//!
//! - [`middleware`]: axum route guard (redirects unauthorized requests) and
//!   the current-subject extractor
//! - [`render`]: conditional-render guard for inline UI elements
//! - [`handle`]: per-screen permission handle with the four-flag shape
//! - [`events`]: broadcast adapter turning "overrides changed" signals into
//!   cache invalidations
//! - [`state`]: shared application state and env wiring
//! - [`logging`]: console logging setup

pub mod events;
pub mod handle;
pub mod logging;
pub mod middleware;
pub mod render;
pub mod state;

pub use events::InvalidationBroadcast;
pub use handle::PermissionHandle;
pub use render::render_if_allowed;
pub use state::{AppState, GuardConfig};

// Re-export the engine surface so consumers depend on one crate.
pub use schoolgate_core::{ResourceKey, keys};
pub use schoolgate_engine::{PermissionEngine, Resolution, ResolvedAccess};
pub use schoolgate_models::{Action, OverrideScope, Permission, RawOverride, Role, Subject, UserId};
pub use schoolgate_overrides::{
    HttpOverrideSource, OverrideFetchError, OverrideSource, OverrideStoreConfig,
};
pub use schoolgate_policy::PolicyTable;
