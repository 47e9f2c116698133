//! Route guard middleware for axum.
//!
//! Protects a route behind a resource key and a required action. The
//! middleware awaits resolution before the handler runs, so protected
//! content can never flash before the answer is known; while the override
//! map loads, the request is simply suspended at the await point. A denied
//! request is redirected, never answered with the protected content.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use schoolgate_models::{Action, Subject};
use schoolgate_overrides::OverrideSource;
use tracing::{debug, warn};

use crate::state::AppState;

/// Middleware function that resolves the subject's permission on a resource
/// key and redirects when the required action is not granted.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use schoolgate::keys;
/// use schoolgate::middleware::guard::require_permission;
/// use schoolgate::Action;
///
/// let protected_routes = Router::new()
///     .route("/nilai", get(grades_screen))
///     .layer(middleware::from_fn_with_state(
///         state.clone(),
///         |state, req, next| {
///             require_permission(state, req, next, keys::PEMBELAJARAN_NILAI_SISWA, Action::Edit)
///         },
///     ));
/// ```
pub async fn require_permission<S: OverrideSource>(
    State(state): State<AppState<S>>,
    req: Request,
    next: Next,
    key: &'static str,
    action: Action,
) -> Response {
    let Some(subject) = req.extensions().get::<Subject>().copied() else {
        debug!(resource = key, "Unauthenticated request, redirecting to login");
        return Redirect::to(&state.guard.login_path).into_response();
    };

    let permission = state.engine.resolve(Some(&subject), key).await;
    if !permission.allows(action) {
        warn!(
            resource = key,
            required = ?action,
            role = %subject.role,
            "Access denied, redirecting"
        );
        return Redirect::to(&state.guard.forbidden_path).into_response();
    }

    next.run(req).await
}

/// Guard requiring view access on a resource key.
pub async fn require_view<S: OverrideSource>(
    state: State<AppState<S>>,
    req: Request,
    next: Next,
    key: &'static str,
) -> Response {
    require_permission(state, req, next, key, Action::View).await
}

/// Guard requiring edit access on a resource key.
pub async fn require_edit<S: OverrideSource>(
    state: State<AppState<S>>,
    req: Request,
    next: Next,
    key: &'static str,
) -> Response {
    require_permission(state, req, next, key, Action::Edit).await
}
