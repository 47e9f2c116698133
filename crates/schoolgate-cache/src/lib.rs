//! # Schoolgate Cache
//!
//! The per-subject resolution cache and request coalescer for permission
//! overrides.
//!
//! This crate provides:
//! - Memoization of fetched override maps per subject
//! - Coalescing of concurrent fetches (one network call per subject)
//! - Coarse, process-wide invalidation with a generation counter
//! - Stale-discard: a fetch started before an invalidation can never
//!   populate the cache after it
//!
//! The cache is an explicit injected object, not an ambient singleton, so
//! tests can instantiate isolated caches per case.
//!
//! # Example
//!
//! ```ignore
//! use schoolgate_cache::{CacheConfig, OverrideCache};
//!
//! let cache = OverrideCache::new(source, CacheConfig::from_env());
//! let overrides = cache.get(&subject).await;
//! cache.invalidate(); // an administrator saved an override somewhere
//! ```

pub mod config;
pub mod store;

pub use config::CacheConfig;
pub use store::OverrideCache;
