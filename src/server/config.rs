use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,

    pub jwt_secret: String,

    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            admin_username: std::env::var("ADMIN_USERNAME")
                .map_err(|_| ConfigError::MissingEnvVar("ADMIN_USERNAME".to_string()))?,
            admin_password: std::env::var("ADMIN_PASSWORD")
                .map_err(|_| ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string()))?,
        })
    }
}
