use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use pinauth_auth::{auth_routes, AuthState};

use crate::{
    config::Config,
    handlers::health::{healthz, livez},
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AuthState, config: &Config) -> Router {
    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .merge(auth_routes())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}
