//! Common response envelopes.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Plain confirmation body returned by delete-style endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
