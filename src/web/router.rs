//! Router configuration for the Web API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{cidr_to_mask, login, mask_to_cidr, AppState};
use super::middleware::{create_cors_layer, token_auth};

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    // Clone the authority for the middleware closure
    let tokens = app_state.tokens.clone();

    Router::new()
        .route("/", get(root))
        .route("/_health", get(health))
        .route("/login", post(login))
        .route("/mask-to-cidr", get(mask_to_cidr))
        .route("/cidr-to-mask", get(cidr_to_mask))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    let tokens = tokens.clone();
                    token_auth(tokens, req, next)
                })),
        )
        .with_state(app_state)
}

/// Liveness probe.
async fn root() -> &'static str {
    "OK"
}

/// Health check.
async fn health() -> &'static str {
    "OK"
}
