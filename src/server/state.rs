//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields use
//! cheap-to-clone types: `DatabaseConnection` is a connection pool (clones
//! share the pool) and `JwtKeys` wraps reference-counted key material.

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, service::auth::JwtKeys};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signing and verification keys for staff bearer tokens.
    pub jwt: JwtKeys,

    /// Username accepted by the login endpoint.
    pub admin_username: String,

    /// Password accepted by the login endpoint.
    pub admin_password: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after configuration has been loaded.
    /// The resulting state is provided to the Axum router for use in request
    /// handlers.
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            jwt: JwtKeys::new(config.jwt_secret.as_bytes()),
            admin_username: config.admin_username.clone(),
            admin_password: config.admin_password.clone(),
        }
    }
}
