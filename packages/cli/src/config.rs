use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("TASKLIGHT_AUTH_SECRET must be set; tokens cannot be signed without it")]
    MissingAuthSecret,
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub database_path: PathBuf,
    /// Token signing secret. Required and never defaulted: a generated or
    /// hard-coded secret would either invalidate tokens on restart or ship
    /// the same key to every deployment.
    pub auth_secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "5000".to_string());

        let port = port_str.parse::<u16>()?;

        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| tasklight_storage::default_database_path());

        let auth_secret = match env::var("TASKLIGHT_AUTH_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => return Err(ConfigError::MissingAuthSecret),
        };

        Ok(Config {
            port,
            cors_origin,
            database_path,
            auth_secret,
        })
    }
}
