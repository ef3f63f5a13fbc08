//! Staff token issuing and verification.
//!
//! Moderation endpoints require a bearer token obtained from the login
//! endpoint. Tokens are HS256 JWTs carrying a `staff` claim; the signing
//! secret comes from configuration.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::auth::TokenDto,
    server::{error::auth::AuthError, error::AppError, state::AppState},
};

/// Token lifetime in seconds (24 hours).
const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Claims carried by a staff bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Token subject (the login username).
    pub sub: String,
    /// Whether the subject may perform moderation actions.
    pub staff: bool,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Signing and verification key material, shared through `AppState`.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Signs a new token for the given claims.
    pub fn issue(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::default(), claims, &self.encoding).map_err(|_| AuthError::InvalidToken)
    }

    /// Verifies a bearer token and returns its claims.
    ///
    /// Signature and expiry are both checked; any failure is reported as a
    /// single `InvalidToken` to avoid leaking which check failed.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

pub struct AuthService<'a> {
    state: &'a AppState,
}

impl<'a> AuthService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Exchanges the configured admin credentials for a staff token.
    pub fn login(&self, username: &str, password: &str) -> Result<TokenDto, AppError> {
        if username != self.state.admin_username || password != self.state.admin_password {
            return Err(AuthError::InvalidCredentials.into());
        }

        let claims = Claims {
            sub: username.to_string(),
            staff: true,
            exp: (chrono::Utc::now().timestamp()) + TOKEN_TTL_SECS,
        };

        let token = self.state.jwt.issue(&claims)?;

        Ok(TokenDto { token })
    }
}
