//! Random passwords for newly registered employees.

use rand::Rng;

use newsdesk_core::config::AuthConfig;

/// Characters generated passwords are drawn from.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789@#$%";

/// Generates initial passwords for employee accounts.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    length: usize,
}

impl PasswordGenerator {
    /// Creates a generator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_length(config.generated_password_length)
    }

    /// Creates a generator producing `length` characters (at least 3).
    pub fn with_length(length: usize) -> Self {
        Self {
            length: length.max(3),
        }
    }

    /// Generates a password containing at least one lowercase letter,
    /// one uppercase letter and one digit.
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();
        loop {
            let candidate: String = (0..self.length)
                .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
                .collect();

            if candidate.chars().any(|c| c.is_ascii_lowercase())
                && candidate.chars().any(|c| c.is_ascii_uppercase())
                && candidate.chars().any(|c| c.is_ascii_digit())
            {
                return candidate;
            }
        }
    }
}
