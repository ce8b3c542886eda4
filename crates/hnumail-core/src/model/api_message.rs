use serde::{Deserialize, Serialize};

/// Generic acknowledgement returned by mutating endpoints, also used as the
/// error body on failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiMessage {
    /// Whether the backend considers the operation successful.
    #[serde(deserialize_with = "super::nullable")]
    pub success: bool,
    /// Human-readable message.
    #[serde(deserialize_with = "super::nullable")]
    pub message: String,
}

impl ApiMessage {
    /// Message text, or `fallback` when the backend sent none.
    #[must_use]
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.message.trim().is_empty() {
            fallback
        } else {
            &self.message
        }
    }
}
