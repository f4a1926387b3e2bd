use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for an error
///
/// Errors are always delivered with HTTP 200 and this body; clients key off
/// the `error` field, not the status code.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn item_not_found() -> Self {
        Self {
            error: "Item not found".to_string(),
        }
    }

    pub fn invalid_request() -> Self {
        Self {
            error: "Invalid request".to_string(),
        }
    }
}
