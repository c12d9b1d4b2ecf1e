//! Endpoint wrappers grouped by area.

pub mod auth;
pub mod news;
pub mod users;

pub use auth::LoginSession;
pub use news::MyNewsQuery;

use newsdesk_core::types::ApiMessage;

/// Best-effort extraction of an acknowledgement message.
pub(crate) fn acknowledgement(body: &str) -> Option<String> {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|m| m.message)
}
