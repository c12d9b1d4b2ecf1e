//! Password management commands.

use clap::{Args, Subcommand};

use newsdesk_auth::{PasswordChange, PasswordPolicy};
use newsdesk_core::error::AppError;

use crate::output;

/// Arguments for password commands
#[derive(Debug, Args)]
pub struct PasswordArgs {
    /// Password subcommand
    #[command(subcommand)]
    pub command: PasswordCommand,
}

/// Password subcommands
#[derive(Debug, Subcommand)]
pub enum PasswordCommand {
    /// Change the signed-in employee's password
    Change,
}

/// Execute password commands
pub async fn execute(args: &PasswordArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        PasswordCommand::Change => {
            let prompt = |text: &str| {
                dialoguer::Password::new()
                    .with_prompt(text)
                    .allow_empty_password(true)
                    .interact()
                    .map_err(super::input_error)
            };
            let form = PasswordChange {
                current_password: prompt("Current password")?,
                new_password: prompt("New password")?,
                confirm_password: prompt("Confirm new password")?,
            };

            if let Err(errors) = PasswordPolicy::new(&config.auth).validate_change(&form) {
                for (field, message) in errors.iter() {
                    output::print_error(&format!("{field}: {message}"));
                }
                return Err(errors.into());
            }

            let client = super::connect(&config)?;
            let message = client
                .change_password(&form.current_password, &form.new_password)
                .await?;
            output::print_success(message.as_deref().unwrap_or("Password changed"));
        }
    }

    Ok(())
}
