//! Current-subject extraction.
//!
//! The authentication layer (out of scope here) verifies credentials and
//! inserts a [`Subject`] into the request extensions. This module only reads
//! it back out; a request without one is an unauthenticated caller, not an
//! error.

use axum::{extract::FromRequestParts, http::request::Parts};
use schoolgate_models::Subject;
use schoolgate_overrides::OverrideSource;
use std::convert::Infallible;

use crate::state::AppState;

/// Extractor for the authenticated subject, if any.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn handler(CurrentSubject(subject): CurrentSubject) -> impl IntoResponse {
///     // subject is Option<Subject>
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentSubject(pub Option<Subject>);

impl<S: OverrideSource> FromRequestParts<AppState<S>> for CurrentSubject {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentSubject(parts.extensions.get::<Subject>().copied()))
    }
}
