//! Bearer token persistence.

pub mod store;

pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
