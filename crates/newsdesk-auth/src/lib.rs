//! # newsdesk-auth
//!
//! Client-side authentication support for Newsdesk.
//!
//! ## Modules
//!
//! - `jwt`: bearer token payload decoding and expiry classification
//! - `session`: persistence of the bearer token between invocations
//! - `password`: password change policy and generated passwords

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{TokenClaims, TokenInspector, TokenState};
pub use password::{PasswordChange, PasswordGenerator, PasswordPolicy};
pub use session::{FileTokenStore, MemoryTokenStore, TokenStore};
