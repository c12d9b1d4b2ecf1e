//! Bearer token payload handling.

pub mod claims;
pub mod decoder;

pub use claims::TokenClaims;
pub use decoder::{TokenInspector, TokenState};
