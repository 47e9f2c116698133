//! Demo server exposing the permission engine over HTTP.
//!
//! Not the production surface; the real application mounts the guards on its
//! own routers. This binary exists to exercise the full stack end to end
//! against a running override service: a guarded grades route plus an
//! introspection endpoint reporting the caller's resolved access.

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    middleware,
    routing::get,
};
use dotenvy::dotenv;
use schoolgate::middleware::{CurrentSubject, guard::require_permission};
use schoolgate::{Action, AppState, HttpOverrideSource, Role, Subject, UserId, keys, logging};
use serde::Serialize;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Serialize)]
struct AccessResponse {
    resource_key: String,
    can_view: bool,
    can_create: bool,
    can_edit: bool,
    can_delete: bool,
}

async fn access(
    State(state): State<AppState<HttpOverrideSource>>,
    CurrentSubject(subject): CurrentSubject,
    Path(resource_key): Path<String>,
) -> Json<AccessResponse> {
    let access = state.engine.access(subject.as_ref(), &resource_key).await;
    Json(AccessResponse {
        resource_key,
        can_view: access.can_view,
        can_create: access.can_create,
        can_edit: access.can_edit,
        can_delete: access.can_delete,
    })
}

async fn grades_screen() -> &'static str {
    "nilai siswa"
}

fn init_router(state: AppState<HttpOverrideSource>) -> Router {
    Router::new()
        .route("/api/access/{resource_key}", get(access))
        .nest(
            "/nilai",
            Router::new().route("/", get(grades_screen)).route_layer(
                middleware::from_fn_with_state(
                    state.clone(),
                    |state: State<AppState<HttpOverrideSource>>, req, next| {
                        require_permission(
                            state,
                            req,
                            next,
                            keys::PEMBELAJARAN_NILAI_SISWA,
                            Action::Edit,
                        )
                    },
                ),
            ),
        )
        .with_state(state)
}

/// The subject injected into every request, from `DEMO_ROLE` and
/// `DEMO_USER_ID`. With neither set, requests run unauthenticated.
fn demo_subject() -> anyhow::Result<Option<Subject>> {
    let Ok(role) = std::env::var("DEMO_ROLE") else {
        return Ok(None);
    };
    let role = Role::from_str(&role)?;
    let user_id = match std::env::var("DEMO_USER_ID") {
        Ok(raw) => UserId::from_uuid(raw.parse::<Uuid>()?),
        Err(_) => UserId::new(),
    };
    Ok(Some(Subject::new(role, user_id)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logging::init_console_logging();

    let state = AppState::from_env()?;
    let mut app = init_router(state);
    if let Some(subject) = demo_subject()? {
        tracing::info!(role = %subject.role, user_id = %subject.user_id, "Using demo subject");
        app = app.layer(Extension(subject));
    }

    let addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Schoolgate demo server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
