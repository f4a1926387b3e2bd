use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for deleting an item
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DeleteItemResponse {
    pub result: String,
}

impl DeleteItemResponse {
    pub fn deleted() -> Self {
        Self {
            result: "Item deleted".to_string(),
        }
    }
}
