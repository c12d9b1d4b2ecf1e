//! Authentication configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Token persistence and credential policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuthConfig {
    /// File the bearer token is persisted to between invocations.
    #[serde(default = "default_token_file")]
    pub token_file: String,
    /// Seconds of clock skew tolerated when checking token expiry.
    #[serde(default)]
    pub expiry_leeway_seconds: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    #[validate(range(min = 6, max = 128))]
    pub password_min_length: usize,
    /// Length of passwords generated for newly registered employees.
    #[serde(default = "default_generated_length")]
    #[validate(range(min = 8, max = 64))]
    pub generated_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_file: default_token_file(),
            expiry_leeway_seconds: 0,
            password_min_length: default_password_min(),
            generated_password_length: default_generated_length(),
        }
    }
}

fn default_token_file() -> String {
    "data/session/token".to_string()
}

fn default_password_min() -> usize {
    8
}

fn default_generated_length() -> usize {
    12
}
