mod common;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    middleware,
    routing::get,
};
use common::{MockOverrideStore, user_override, users};
use http_body_util::BodyExt;
use schoolgate::middleware::guard::require_permission;
use schoolgate::{
    Action, AppState, GuardConfig, Permission, PermissionEngine, PolicyTable, Role, Subject, keys,
};
use schoolgate_cache::CacheConfig;
use tower::util::ServiceExt;

fn state(store: MockOverrideStore) -> AppState<MockOverrideStore> {
    let engine = PermissionEngine::new(PolicyTable::default(), store, CacheConfig::default());
    AppState::new(engine, GuardConfig::default())
}

/// A router with one grades route protected by an edit guard.
fn app(state: AppState<MockOverrideStore>) -> Router {
    Router::new()
        .route("/nilai", get(|| async { "grades screen" }))
        .layer(middleware::from_fn_with_state(
            state,
            |state: State<AppState<MockOverrideStore>>, req, next| {
                require_permission(
                    state,
                    req,
                    next,
                    keys::PEMBELAJARAN_NILAI_SISWA,
                    Action::Edit,
                )
            },
        ))
}

fn request(subject: Option<Subject>) -> Request<Body> {
    let mut builder = Request::builder().uri("/nilai");
    if let Some(subject) = subject {
        builder = builder.extension(subject);
    }
    builder.body(Body::empty()).unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_unauthenticated_redirects_to_login() {
    let app = app(state(MockOverrideStore::empty()));
    let response = app.oneshot(request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_denied_role_redirects_to_fallback() {
    let app = app(state(MockOverrideStore::empty()));
    let student = Subject::new(Role::Student, users::STUDENT_A);
    let response = app.oneshot(request(Some(student))).await.unwrap();

    // Students may view grades but not edit them.
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_granted_role_passes_through() {
    let app = app(state(MockOverrideStore::empty()));
    let teacher = Subject::new(Role::Teacher, users::TEACHER_X);
    let response = app.oneshot(request(Some(teacher))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"grades screen");
}

#[tokio::test]
async fn test_override_revokes_route_access() {
    // An override strips teacher X's edit right on grades.
    let store = MockOverrideStore::with_rows(vec![user_override(
        users::TEACHER_X,
        keys::PEMBELAJARAN_NILAI_SISWA,
        Permission::VIEW,
    )]);
    let app = app(state(store));
    let teacher = Subject::new(Role::Teacher, users::TEACHER_X);
    let response = app.oneshot(request(Some(teacher))).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_admin_passes_any_guard() {
    let app = app(state(MockOverrideStore::empty()));
    let admin = Subject::new(Role::Admin, users::ADMIN);
    let response = app.oneshot(request(Some(admin))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
