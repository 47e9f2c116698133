//! Conditional-render guard.

use schoolgate_engine::PermissionEngine;
use schoolgate_models::{Action, Subject};
use schoolgate_overrides::OverrideSource;

/// Render a UI fragment only if the subject is granted an action on a key.
///
/// Returns `None` when access is denied or the subject is unauthenticated:
/// not an error and not a placeholder. Used to hide buttons and menu entries
/// a subject cannot use.
///
/// # Example
///
/// ```rust,ignore
/// let delete_button = render_if_allowed(
///     &state.engine,
///     subject.as_ref(),
///     keys::SISWA,
///     Action::Delete,
///     || delete_button_markup(student_id),
/// )
/// .await;
/// ```
pub async fn render_if_allowed<S, T>(
    engine: &PermissionEngine<S>,
    subject: Option<&Subject>,
    key: &str,
    action: Action,
    render: impl FnOnce() -> T,
) -> Option<T>
where
    S: OverrideSource,
{
    engine
        .allows(subject, key, action)
        .await
        .then(render)
}
