//! Password policy enforcement for password changes.

use newsdesk_core::config::AuthConfig;
use newsdesk_core::types::FieldErrors;

/// The three fields of the change-password form.
#[derive(Debug, Clone, Default)]
pub struct PasswordChange {
    /// Password currently in use.
    pub current_password: String,
    /// Requested password.
    pub new_password: String,
    /// Repetition of the requested password.
    pub confirm_password: String,
}

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordPolicy {
    /// Creates a new policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_min_length(config.password_min_length)
    }

    /// Creates a policy with an explicit minimum length.
    pub fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Returns the first rule `password` violates, if any.
    pub fn check_strength(&self, password: &str) -> Option<String> {
        if password.chars().count() < self.min_length {
            return Some(format!(
                "Password must be at least {} characters long",
                self.min_length
            ));
        }

        let has_lower = password.chars().any(|c| c.is_lowercase());
        let has_upper = password.chars().any(|c| c.is_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        if !(has_lower && has_upper && has_digit) {
            return Some(
                "Password must contain at least one uppercase letter, one lowercase letter, and one number"
                    .to_string(),
            );
        }

        None
    }

    /// Validates the whole change-password form.
    ///
    /// Each field reports at most one message.
    pub fn validate_change(&self, form: &PasswordChange) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if form.current_password.is_empty() {
            errors.add("currentPassword", "Current password is required");
        }

        if form.new_password.is_empty() {
            errors.add("newPassword", "New password is required");
        } else if let Some(message) = self.check_strength(&form.new_password) {
            errors.add("newPassword", message);
        } else if form.new_password == form.current_password {
            errors.add(
                "newPassword",
                "New password must be different from the current password",
            );
        }

        if form.confirm_password.is_empty() {
            errors.add("confirmPassword", "Please confirm your new password");
        } else if form.confirm_password != form.new_password {
            errors.add("confirmPassword", "Passwords do not match");
        }

        errors.into_result()
    }
}
