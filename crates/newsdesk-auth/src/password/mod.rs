//! Password policy and generation.

pub mod generator;
pub mod validator;

pub use generator::PasswordGenerator;
pub use validator::{PasswordChange, PasswordPolicy};
