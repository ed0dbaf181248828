use axum::middleware::from_fn_with_state;
use axum::routing::post;
use axum::{Router, routing::get};

use super::handlers;
use super::handlers::auth::{logout, signup, verify};
use super::handlers::probes::{healthz, livez};
use super::middlewares::authn;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let app = Router::new()
        .route("/apply", post(handlers::applications::apply))
        .route("/logout", post(logout))
        .layer(from_fn_with_state(state.clone(), authn::authenticate))
        .route("/signup", post(signup))
        .route("/verify", post(verify))
        .route(
            "/applicants/{id}",
            get(handlers::applicants::retrieve).patch(handlers::applicants::update),
        )
        .route(
            "/applicants/{id}/resume",
            get(handlers::applicants::resume_exists),
        )
        .route("/employers", post(handlers::employers::create))
        .route(
            "/employers/{id}",
            get(handlers::employers::retrieve).patch(handlers::employers::update),
        )
        .route(
            "/jobs",
            get(handlers::jobs::list).post(handlers::jobs::create),
        )
        .route("/jobs/count", get(handlers::jobs::count))
        .route("/applications/exists", get(handlers::applications::exists))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state);

    Ok(app)
}
