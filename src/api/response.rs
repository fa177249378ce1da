//! # Response Formatting
//!
//! Message-only response bodies, shared by delete confirmations and error
//! responses.

use serde::Serialize;
use utoipa::ToSchema;

/// Message-only response body
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Contact deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Confirmation body for a successful delete.
    pub fn contact_deleted() -> Self {
        Self::new("Contact deleted successfully")
    }
}
