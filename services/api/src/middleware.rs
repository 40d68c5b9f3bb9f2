//! Authentication middleware
//!
//! Resolves the Authorization header into an [`AuthContext`] exactly once
//! per request and hands it to handlers through request extensions.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};

use crate::auth::AuthContext;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Pull the session token out of the Authorization header
///
/// The raw session id is the credential; an optional `Bearer ` prefix is
/// tolerated for clients that insist on one.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .map(|value| value.strip_prefix("Bearer ").unwrap_or(value))
}

/// Require a valid session on the request
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> ApiResult<Response> {
    let token = session_token(req.headers());
    let ctx = state.auth_service.validate(token).await?;

    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}

/// Require the already-authenticated user to be an admin
///
/// Must sit inside `require_auth`; a missing context means the layering
/// is wrong and the request is rejected outright.
pub async fn require_admin(req: Request<Body>, next: Next) -> ApiResult<Response> {
    let ctx = req
        .extensions()
        .get::<AuthContext>()
        .ok_or(ApiError::AdminRequired)?;

    if !ctx.user.is_admin {
        return Err(ApiError::AdminRequired);
    }

    Ok(next.run(req).await)
}
