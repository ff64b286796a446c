use std::path::PathBuf;

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Directory overriding the bundled rank/certificate/form catalog.
    pub catalog_dir: Option<PathBuf>,
    /// Password assigned to the default staff accounts seeded at startup.
    pub seed_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        let catalog_dir = std::env::var("CATALOG_DIR").ok().map(PathBuf::from);

        let seed_password =
            std::env::var("DEFAULT_STAFF_PASSWORD").unwrap_or_else(|_| "muster123".to_string());
        if seed_password.is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: "DEFAULT_STAFF_PASSWORD".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            database_url,
            bind_address,
            catalog_dir,
            seed_password,
        })
    }
}
