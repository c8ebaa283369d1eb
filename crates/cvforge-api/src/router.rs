//! Route definitions for the CV Forge HTTP API.
//!
//! Versioned routes are mounted under `/v1`; the health check sits at
//! the root. State is threaded to all handlers via `.with_state`.

use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Builds the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_size_bytes;
    let cors = build_cors_layer(&state.config.server.cors);

    let v1 = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(resume_routes())
        .merge(media_routes());

    Router::new()
        .nest("/v1", v1)
        .route("/health", get(handlers::health::health))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/verify", post(handlers::auth::verify))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/forgot-password", post(handlers::auth::forgot_password))
        .route(
            "/auth/reset-password/verify",
            post(handlers::auth::verify_reset_code),
        )
        .route("/auth/reset-password", post(handlers::auth::reset_password))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list))
        .route("/users", post(handlers::user::create))
        .route("/users/me", get(handlers::user::me))
        .route("/users/me", put(handlers::user::update_me))
        .route("/users/me/password", put(handlers::user::change_password))
        .route("/users/{id}", get(handlers::user::get))
        .route("/users/{id}", put(handlers::user::update))
        .route("/users/{id}", delete(handlers::user::delete))
}

fn resume_routes() -> Router<AppState> {
    Router::new()
        .route("/resumes", get(handlers::resume::list))
        .route("/resumes", post(handlers::resume::create))
        .route("/resumes/basic", post(handlers::resume::stage_basic))
        .route("/resumes/main", post(handlers::resume::stage_main))
        .route("/resumes/generate", post(handlers::resume::generate))
        .route("/resumes/me", get(handlers::resume::mine))
        .route("/resumes/{id}", get(handlers::resume::get))
        .route("/resumes/{id}", delete(handlers::resume::delete))
}

fn media_routes() -> Router<AppState> {
    Router::new()
        .route("/media/avatar", post(handlers::media::upload_avatar))
        .route("/media/photo", post(handlers::media::upload_photo))
}
