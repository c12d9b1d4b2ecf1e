//! Login, logout and password change.

use chrono::Utc;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use newsdesk_core::error::AppError;
use newsdesk_entity::user::{LoginUser, User, UserRole};

use crate::client::ApiClient;

/// Credentials posted to both login endpoints.
#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
    user: LoginUser,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct LoginSession {
    /// The signed-in user.
    pub user: User,
    /// Whether a bearer token was issued and stored.
    pub token_stored: bool,
}

impl ApiClient {
    /// `POST auth/v1/login`. The issued token is stored.
    pub async fn login_employee(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginSession, AppError> {
        let url = self.endpoints().url(&["auth", "v1", "login"]);
        let response: LoginResponse = self
            .send(Method::POST, url, Some(&Credentials { email, password }))
            .await?;

        let token = response
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::authentication("Login response did not include a token"))?;
        self.tokens().save(&token).await?;

        let user = response.user.into_user(UserRole::Employee, Utc::now());
        info!(user_id = %user.id, "Employee logged in");

        Ok(LoginSession {
            user,
            token_stored: true,
        })
    }

    /// `POST login_user`. A token is stored when the platform issues one.
    pub async fn login_admin(&self, email: &str, password: &str) -> Result<LoginSession, AppError> {
        let url = self.endpoints().url(&["login_user"]);
        let response: LoginResponse = self
            .send(Method::POST, url, Some(&Credentials { email, password }))
            .await?;

        let token_stored = match response.token.filter(|t| !t.trim().is_empty()) {
            Some(token) => {
                self.tokens().save(&token).await?;
                true
            }
            None => false,
        };

        let user = response.user.into_user(UserRole::Admin, Utc::now());
        info!(user_id = %user.id, token_stored, "Admin logged in");

        Ok(LoginSession { user, token_stored })
    }

    /// Logs out of the portal matching `role`.
    ///
    /// The server call is best effort; the stored token is cleared either way.
    pub async fn logout(&self, role: UserRole) -> Result<(), AppError> {
        let url = match role {
            UserRole::Employee => self.endpoints().url(&["auth", "v1", "logout"]),
            UserRole::Admin => self.endpoints().url(&["auth", "logout"]),
        };

        if let Err(e) = self.send_raw::<()>(Method::POST, url, None).await {
            warn!(error = %e, "Server-side logout failed, clearing local session anyway");
        }

        self.tokens().clear().await?;
        info!(%role, "Logged out");
        Ok(())
    }

    /// `POST auth/v1/change-password`. Returns the platform's message.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<Option<String>, AppError> {
        let url = self.endpoints().url(&["auth", "v1", "change-password"]);
        let body = ChangePasswordRequest {
            current_password,
            new_password,
        };
        let (_, text) = self.send_raw(Method::POST, url, Some(&body)).await?;
        Ok(super::acknowledgement(&text))
    }
}
