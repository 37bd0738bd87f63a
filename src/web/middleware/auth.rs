//! Token verification middleware and extractor.

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::auth::{Claims, TokenAuthority, TokenError};

/// Rejection for failed token verification.
///
/// Protected endpoints answer 401 with an empty body; which verification
/// step failed is logged server-side only.
#[derive(Debug)]
pub struct Unauthorized;

impl IntoResponse for Unauthorized {
    fn into_response(self) -> Response {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

/// Extractor for authenticated requests.
///
/// Use this extractor to require a valid session token for a handler.
/// The handler receives the token's claims if verification succeeds.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Unauthorized;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            // Bearer-prefixed values have the prefix stripped; a bare
            // header value is treated as the token itself.
            let token = match parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
            {
                Some(header) => header.strip_prefix("Bearer ").unwrap_or(header),
                None => "",
            };

            // Get the token authority from extensions (set by middleware)
            let authority = parts
                .extensions
                .get::<Arc<TokenAuthority>>()
                .ok_or_else(|| {
                    tracing::error!("token authority not configured");
                    Unauthorized
                })?;

            match authority.verify(token) {
                Ok(claims) => Ok(AuthUser(claims)),
                Err(TokenError::Missing) => {
                    tracing::debug!("request without session token");
                    Err(Unauthorized)
                }
                Err(e) => {
                    tracing::debug!(error = %e, "token verification failed");
                    Err(Unauthorized)
                }
            }
        })
    }
}

/// Middleware function to inject the token authority into request
/// extensions.
pub async fn token_auth(
    authority: Arc<TokenAuthority>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(authority);
    next.run(request).await
}
