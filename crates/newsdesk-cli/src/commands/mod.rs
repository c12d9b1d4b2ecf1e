//! CLI command definitions and dispatch.

pub mod admin;
pub mod articles;
pub mod config;
pub mod news;
pub mod password;
pub mod session;

use std::path::Path;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

use newsdesk_auth::FileTokenStore;
use newsdesk_client::ApiClient;
use newsdesk_core::config::AppConfig;
use newsdesk_core::error::AppError;

use crate::output::OutputFormat;

/// Newsdesk: read, write and moderate news from the terminal
#[derive(Debug, Parser)]
#[command(name = "newsdesk", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in to the employee or admin portal
    Login(session::LoginArgs),
    /// Sign out and forget the stored token
    Logout(session::LogoutArgs),
    /// Browse published news
    News(news::NewsArgs),
    /// Manage your own articles
    Articles(articles::ArticlesArgs),
    /// Admin tables and employee registration
    Admin(admin::AdminArgs),
    /// Password management
    Password(password::PasswordArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Login(args) => session::login(args, &self.config).await,
            Commands::Logout(args) => session::logout(args, &self.config).await,
            Commands::News(args) => news::execute(args, &self.config, self.format).await,
            Commands::Articles(args) => articles::execute(args, &self.config, self.format).await,
            Commands::Admin(args) => admin::execute(args, &self.config, self.format).await,
            Commands::Password(args) => password::execute(args, &self.config).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: API client backed by the configured token file
pub fn connect(config: &AppConfig) -> Result<ApiClient, AppError> {
    let tokens = Arc::new(FileTokenStore::from_config(&config.auth));
    ApiClient::new(config, tokens)
}

/// Helper: read a JSON export from disk
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::with_source(
            newsdesk_core::error::ErrorKind::Storage,
            format!("Failed to read '{}'", path.display()),
            e,
        )
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Helper: map a dialoguer failure
pub fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {e}"))
}

/// Helper: prompt for a value unless it was given on the command line
pub fn text_or_prompt(value: &Option<String>, prompt: &str) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v.clone()),
        None => dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(input_error),
    }
}
