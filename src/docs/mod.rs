use crate::models::*;
use utoipa::OpenApi;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// List all items
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All items in insertion order", body = [Item])
    )
)]
#[allow(dead_code)]
pub async fn list_items_doc() {}

/// Get a single item
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(("id" = u64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item, or an Item-not-found error body", body = Item)
    )
)]
#[allow(dead_code)]
pub async fn get_item_doc() {}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "The created item, or an Invalid-request error body", body = Item)
    )
)]
#[allow(dead_code)]
pub async fn create_item_doc() {}

/// Update an existing item
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(("id" = u64, Path, description = "Item id")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "The updated item, or an Item-not-found error body", body = Item)
    )
)]
#[allow(dead_code)]
pub async fn update_item_doc() {}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(("id" = u64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Deletion acknowledgement, present or not", body = DeleteItemResponse)
    )
)]
#[allow(dead_code)]
pub async fn delete_item_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check_doc,
        list_items_doc,
        get_item_doc,
        create_item_doc,
        update_item_doc,
        delete_item_doc,
    ),
    components(
        schemas(
            HealthResponse,
            Item,
            CreateItemRequest,
            UpdateItemRequest,
            DeleteItemResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
