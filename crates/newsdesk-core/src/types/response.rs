//! Response bodies shared by several API endpoints.

use serde::{Deserialize, Serialize};

/// Message envelope the platform returns with errors and acknowledgements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}
