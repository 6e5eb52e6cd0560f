//! Account profile handlers. Every route here sits behind the auth guard.

use axum::{extract::State, response::Json, routing::get, Extension, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::hide_missing_identity;
use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::{AppError, AppResult};

/// Profile update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    /// New display name
    #[schema(example = "Alice Smith")]
    pub name: Option<String>,
}

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).patch(update_profile))
}

/// Get the caller's profile
#[utoipa::path(
    get,
    path = "/api/v1/accounts/profile",
    tag = "Accounts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile", body = UserResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .get_user(current_user.id)
        .await
        .map_err(hide_missing_identity)?;

    Ok(Json(UserResponse::from(user)))
}

/// Update the caller's display name
#[utoipa::path(
    patch,
    path = "/api/v1/accounts/profile",
    tag = "Accounts",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserResponse),
        (status = 400, description = "name required"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    let name = payload
        .name
        .ok_or_else(|| AppError::bad_request("name required"))?;

    let user = state
        .user_service
        .update_display_name(current_user.id, name)
        .await
        .map_err(hide_missing_identity)?;

    tracing::info!(user_id = %user.id, "display name updated");
    Ok(Json(UserResponse::from(user)))
}
