//! Login and logout commands.

use clap::Args;

use newsdesk_core::error::AppError;
use newsdesk_entity::user::UserRole;

use crate::output;

/// Arguments for `login`
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Sign in to the admin portal instead of the employee portal
    #[arg(long)]
    pub admin: bool,
    /// Account email (will prompt if not provided)
    #[arg(short, long)]
    pub email: Option<String>,
    /// Password (will prompt if not provided)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Arguments for `logout`
#[derive(Debug, Args)]
pub struct LogoutArgs {
    /// Sign out of the admin portal
    #[arg(long)]
    pub admin: bool,
}

/// Execute `login`
pub async fn login(args: &LoginArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let client = super::connect(&config)?;

    let email = super::text_or_prompt(&args.email, "Email")?;
    let password = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(super::input_error)?,
    };

    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::validation("Email and password are required"));
    }

    let session = if args.admin {
        client.login_admin(email.trim(), &password).await?
    } else {
        client.login_employee(email.trim(), &password).await?
    };

    output::print_success(&format!(
        "Logged in as {} ({})",
        session.user.name, session.user.role
    ));
    if !session.token_stored {
        output::print_warning("The platform did not issue a token; authenticated calls will fail");
    }
    Ok(())
}

/// Execute `logout`
pub async fn logout(args: &LogoutArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let client = super::connect(&config)?;

    let role = if args.admin {
        UserRole::Admin
    } else {
        UserRole::Employee
    };
    client.logout(role).await?;

    output::print_success("Logged out");
    Ok(())
}
