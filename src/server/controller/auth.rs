use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, TokenDto},
    },
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in as the site moderator.
///
/// Exchanges the configured admin credentials for a bearer token. The token
/// carries the staff claim and must be presented on moderation endpoints.
///
/// # Returns
/// - `200 OK` - Staff bearer token
/// - `401 Unauthorized` - Credentials do not match the configuration
/// - `500 Internal Server Error` - Token signing failure
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = TokenDto),
        (status = 401, description = "Invalid login credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthService::new(&state).login(&payload.username, &payload.password)?;

    Ok((StatusCode::OK, Json(token)))
}
