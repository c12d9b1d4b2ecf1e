//! Token stores shared by the API client and the CLI.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use newsdesk_core::config::AuthConfig;
use newsdesk_core::error::AppError;

/// Where the current bearer token lives.
#[async_trait]
pub trait TokenStore: Send + Sync + std::fmt::Debug {
    /// Returns the stored token, if any.
    async fn load(&self) -> Result<Option<String>, AppError>;

    /// Replaces the stored token.
    async fn save(&self, token: &str) -> Result<(), AppError>;

    /// Removes the stored token. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<(), AppError>;
}

/// Persists the token to a single file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    /// Token file location.
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.token_file)
    }

    /// Token file location.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<String>, AppError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                newsdesk_core::error::ErrorKind::Storage,
                format!("Failed to read token file '{}'", self.path.display()),
                e,
            )),
        }
    }

    async fn save(&self, token: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, token).await?;
        debug!(path = %self.path.display(), "Token saved");
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "Token cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Keeps the token in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<String>, AppError> {
        Ok(self.token.read().await.clone())
    }

    async fn save(&self, token: &str) -> Result<(), AppError> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        *self.token.write().await = None;
        Ok(())
    }
}
