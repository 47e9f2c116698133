//! Cache configuration.

use std::env;

/// Override cache configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `OVERRIDES_TTL_SECONDS`: time-based expiry for cached override maps,
///   in seconds. `0` disables expiry (default). Correctness does not depend
///   on a TTL; invalidation drives freshness.
#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// Time-to-live for cached override maps in seconds; 0 disables.
    pub ttl_seconds: u64,
}

impl CacheConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            ttl_seconds: env::var("OVERRIDES_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_seconds: 0 }
    }
}
