use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was supplied for a staff endpoint.
    #[error("Missing authorization token")]
    MissingToken,

    /// The supplied bearer token failed signature or expiry validation.
    #[error("Invalid or expired authorization token")]
    InvalidToken,

    /// Login attempted with credentials that do not match the configuration.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Token is valid but lacks the privilege the endpoint requires.
    ///
    /// # Fields
    /// - Subject of the token, logged for diagnostics
    #[error("Access denied for {0}")]
    AccessDenied(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Missing or invalid tokens and bad credentials map to 401; a valid token
/// without the required privilege maps to 403. Messages stay generic to avoid
/// leaking which part of the check failed.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid login credentials".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(subject) => {
                tracing::debug!("Access denied for {}", subject);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Insufficient permissions".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
