use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single to-do item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: String,
}

/// Request body for creating an item
///
/// `name` is required but modelled as an Option so its absence can be
/// answered with the InvalidRequest body instead of a deserialization
/// rejection.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Request body for updating an item
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}
