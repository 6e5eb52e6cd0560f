//! Bearer token guard.
//!
//! A request moves `NoToken -> TokenPresent -> {Verified, Rejected}`. On
//! `Verified` the subject is attached as [`CurrentUser`]; the guard itself
//! never touches the credential store.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;
use crate::services::AuthService;

/// Authenticated subject extracted from the access token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: Uuid,
}

/// Pull the bearer token out of the `Authorization` header.
///
/// Returns `None` for a missing header, a non-bearer scheme or an empty token.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Run the guard against a set of request headers.
pub fn authenticate(headers: &HeaderMap, auth: &dyn AuthService) -> Result<CurrentUser, AppError> {
    let token = bearer_token(headers).ok_or(AppError::MissingToken)?;

    let id = auth.verify_access(token).map_err(|reason| {
        tracing::debug!(%reason, "bearer token rejected");
        AppError::InvalidToken(reason)
    })?;

    Ok(CurrentUser { id })
}

/// JWT authentication middleware.
///
/// Validates the bearer token and injects [`CurrentUser`] into the request
/// extensions for downstream handlers.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let current_user = authenticate(request.headers(), state.auth_service.as_ref())?;

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}
