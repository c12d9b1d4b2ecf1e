//! Application configuration schemas.
//!
//! All configuration structs are deserialized from an optional TOML file
//! via the `config` crate, overlaid by `NEWSDESK__*` environment variables.
//! Each sub-module represents a logical configuration section.

pub mod api;
pub mod auth;
pub mod logging;
pub mod pagination;

use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

pub use self::api::ApiConfig;
pub use self::auth::AuthConfig;
pub use self::logging::LoggingConfig;
pub use self::pagination::PaginationConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// News platform API settings.
    #[serde(default)]
    #[validate(nested)]
    pub api: ApiConfig,
    /// Token and password settings.
    #[serde(default)]
    #[validate(nested)]
    pub auth: AuthConfig,
    /// Page sizes of the list views.
    #[serde(default)]
    #[validate(nested)]
    pub pagination: PaginationConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional. Environment variables prefixed with
    /// `NEWSDESK` and separated by `__` override file values, e.g.
    /// `NEWSDESK__API__BASE_URL`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        debug!(path, "Loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("NEWSDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        Self::from_config(config)
    }

    /// Parse configuration from TOML text (no environment overlay).
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        Self::from_config(config)
    }

    fn from_config(config: config::Config) -> Result<Self, AppError> {
        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app_config.validate()?;
        Ok(app_config)
    }
}
