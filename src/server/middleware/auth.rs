use axum::http::{header, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::{Claims, JwtKeys},
};

pub enum Permission {
    Staff,
}

/// Guards moderation endpoints behind a bearer token.
///
/// Controllers construct a guard from the shared key material and the request
/// headers, then call `require` with the permissions the endpoint needs. The
/// returned claims identify the caller for logging.
pub struct AuthGuard<'a> {
    keys: &'a JwtKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(keys: &'a JwtKeys, headers: &'a HeaderMap) -> Self {
        Self { keys, headers }
    }

    pub fn require(&self, permissions: &[Permission]) -> Result<Claims, AppError> {
        let token = self.bearer_token()?;
        let claims = self.keys.verify(token)?;

        for permission in permissions {
            match permission {
                Permission::Staff => {
                    if !claims.staff {
                        return Err(AuthError::AccessDenied(claims.sub).into());
                    }
                }
            }
        }

        Ok(claims)
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let header = self
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?;

        let value = header.to_str().map_err(|_| AuthError::InvalidToken)?;

        value
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidToken)
    }
}
