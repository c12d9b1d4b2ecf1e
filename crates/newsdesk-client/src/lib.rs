//! # newsdesk-client
//!
//! Typed client for the news platform's HTTP JSON API.
//!
//! Every request passes through the auth interceptor in [`client`], which
//! attaches the stored bearer token and discards tokens that expired or
//! cannot be decoded. Endpoint wrappers live in [`api`].

pub mod api;
pub mod client;
pub mod endpoint;
pub mod response;
pub mod retry;

pub use api::{LoginSession, MyNewsQuery};
pub use client::{ApiClient, SESSION_EXPIRED_MESSAGE};
pub use retry::RetryPolicy;
