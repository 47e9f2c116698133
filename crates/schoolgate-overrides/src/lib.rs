//! # Schoolgate Overrides
//!
//! The remote-backed override store. Administrators can override the
//! built-in default policy per role or per individual user; this crate
//! fetches those records and merges them into the per-subject override map.
//!
//! Failure semantics: a failed fetch is reported as an error here, and the
//! caching layer degrades it to "no overrides for this subject" so the
//! default policy still applies. A malformed record is skipped with a
//! data-quality warning; the rest of the map is still used.

pub mod http;
pub mod merge;

use schoolgate_models::{RawOverride, Subject};

pub use http::{HttpOverrideSource, OverrideStoreConfig};
pub use merge::{decode_records, merge_overrides};

/// Error type for override fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum OverrideFetchError {
    #[error("override request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("override response was not a JSON array: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A source of override records for a subject.
///
/// One call returns every override applicable to the subject: all role-level
/// overrides for the subject's role and all user-level overrides for the
/// subject's identity. Merge precedence is applied afterwards by
/// [`merge_overrides`].
pub trait OverrideSource: Send + Sync + 'static {
    fn fetch(
        &self,
        subject: &Subject,
    ) -> impl Future<Output = Result<Vec<RawOverride>, OverrideFetchError>> + Send;
}
