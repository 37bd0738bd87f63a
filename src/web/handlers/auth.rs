//! Login handler and shared application state.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::auth::{verify_credentials, CredentialError, TokenAuthority};
use crate::db::{CredentialRepository, Database};
use crate::web::dto::{LoginRequest, LoginResponse};
use crate::web::error::ApiError;

/// Application state shared across handlers.
pub struct AppState {
    /// Credential store.
    pub db: Database,
    /// Token issuer/verifier, built once from the configured secret.
    pub tokens: Arc<TokenAuthority>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, tokens: Arc<TokenAuthority>) -> Self {
        Self { db, tokens }
    }
}

/// POST /login - verify credentials and issue a session token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = body.map_err(|e| {
        tracing::debug!(error = %e, "rejected malformed login body");
        ApiError::bad_request("Invalid request body")
    })?;

    let repo = CredentialRepository::new(state.db.pool());
    let role = verify_credentials(&repo, &req.username, &req.password)
        .await
        .map_err(|e| match e {
            CredentialError::Store(msg) => {
                tracing::error!(error = %msg, "credential store lookup failed");
                ApiError::internal("An internal error occurred")
            }
            // Which of the two happened is for the logs only; the
            // response must not reveal whether the username exists.
            kind => {
                tracing::info!(username = %req.username, error = %kind, "login rejected");
                ApiError::unauthorized("Invalid username or password")
            }
        })?;

    let token = state.tokens.issue(&role).map_err(|e| {
        tracing::error!(error = %e, "token signing failed");
        ApiError::internal("Error generating token")
    })?;

    Ok(Json(LoginResponse { role, token }))
}
