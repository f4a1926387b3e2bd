use crate::models::{CreateItemRequest, DeleteItemResponse, ErrorResponse, Item, UpdateItemRequest};
use crate::store::SharedStore;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::{debug, info};

/// Welcome endpoint
pub async fn welcome() -> &'static str {
    "Welcome To The Sample To-Do List App"
}

/// List all items
pub async fn list_items(State(store): State<SharedStore>) -> Json<Vec<Item>> {
    let store = store.lock().await;
    Json(store.list_all().to_vec())
}

/// Get a single item by id
pub async fn get_item(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Result<Json<Item>, Json<ErrorResponse>> {
    let store = store.lock().await;
    match store.get(id) {
        Some(item) => Ok(Json(item.clone())),
        None => {
            debug!("Item {} not found", id);
            Err(Json(ErrorResponse::item_not_found()))
        }
    }
}

/// Create a new item
///
/// The payload extractor is a Result so that a missing or malformed JSON
/// body surfaces as the InvalidRequest response rather than an axum
/// rejection; the legacy contract answers HTTP 200 with an error body.
pub async fn create_item(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<Json<Item>, Json<ErrorResponse>> {
    let Ok(Json(payload)) = payload else {
        debug!("Create rejected: body is not valid JSON");
        return Err(Json(ErrorResponse::invalid_request()));
    };
    let Some(name) = payload.name else {
        debug!("Create rejected: missing name");
        return Err(Json(ErrorResponse::invalid_request()));
    };

    let mut store = store.lock().await;
    let item = store.create(name, payload.description);
    info!("Created item {} '{}'", item.id, item.name);
    Ok(Json(item))
}

/// Update an existing item
pub async fn update_item(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
    Json(payload): Json<UpdateItemRequest>,
) -> Result<Json<Item>, Json<ErrorResponse>> {
    let mut store = store.lock().await;
    match store.update(id, payload.name, payload.description) {
        Some(item) => {
            info!("Updated item {}", id);
            Ok(Json(item.clone()))
        }
        None => {
            debug!("Update failed: item {} not found", id);
            Err(Json(ErrorResponse::item_not_found()))
        }
    }
}

/// Delete an item
///
/// Succeeds whether or not the id exists.
pub async fn delete_item(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Json<DeleteItemResponse> {
    let mut store = store.lock().await;
    store.delete(id);
    info!("Deleted item {}", id);
    Json(DeleteItemResponse::deleted())
}

#[cfg(test)]
mod tests {
    use crate::routes::create_api_routes;
    use crate::store::ItemStore;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        Router,
    };
    use std::sync::Arc;
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    fn test_app(store: ItemStore) -> Router {
        create_api_routes(Arc::new(Mutex::new(store)))
    }

    async fn response_body<T: serde::de::DeserializeOwned>(
        response: axum::http::Response<Body>,
    ) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn welcome_returns_plain_text_greeting() {
        let sut = test_app(ItemStore::new());

        let response = sut.oneshot(empty_request(Method::GET, "/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Welcome To The Sample To-Do List App");
    }

    #[tokio::test]
    async fn list_items_returns_all_items_in_order() {
        let sut = test_app(ItemStore::with_sample_items());

        let response = sut
            .oneshot(empty_request(Method::GET, "/items"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Vec<serde_json::Value> = response_body(response).await;
        assert_eq!(body.len(), 2);
        assert_eq!(body[0]["id"], 1);
        assert_eq!(body[1]["id"], 2);
    }

    #[tokio::test]
    async fn create_then_get_returns_created_item() {
        let sut = test_app(ItemStore::new());

        let response = sut
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/items",
                serde_json::json!({"name": "X"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created: serde_json::Value = response_body(response).await;
        let id = created["id"].as_u64().unwrap();

        let response = sut
            .oneshot(empty_request(Method::GET, &format!("/items/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched: serde_json::Value = response_body(response).await;
        assert_eq!(fetched["name"], "X");
        assert_eq!(fetched["description"], "");
    }

    #[tokio::test]
    async fn get_missing_item_returns_not_found_body_with_200() {
        let sut = test_app(ItemStore::with_sample_items());

        let response = sut
            .oneshot(empty_request(Method::GET, "/items/9999"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = response_body(response).await;
        assert_eq!(body, serde_json::json!({"error": "Item not found"}));
    }

    #[tokio::test]
    async fn two_creates_yield_sequential_unique_ids() {
        let sut = test_app(ItemStore::new());

        let first: serde_json::Value = response_body(
            sut.clone()
                .oneshot(json_request(
                    Method::POST,
                    "/items",
                    serde_json::json!({"name": "first"}),
                ))
                .await
                .unwrap(),
        )
        .await;
        let second: serde_json::Value = response_body(
            sut.oneshot(json_request(
                Method::POST,
                "/items",
                serde_json::json!({"name": "second"}),
            ))
            .await
            .unwrap(),
        )
        .await;

        assert_eq!(first["id"], 1);
        assert_eq!(second["id"], 2);
    }

    #[tokio::test]
    async fn create_without_name_returns_invalid_request_and_stores_nothing() {
        let sut = test_app(ItemStore::new());

        let response = sut
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/items",
                serde_json::json!({"description": "no name"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = response_body(response).await;
        assert_eq!(body, serde_json::json!({"error": "Invalid request"}));

        let response = sut
            .oneshot(empty_request(Method::GET, "/items"))
            .await
            .unwrap();
        let items: Vec<serde_json::Value> = response_body(response).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn create_with_non_json_body_returns_invalid_request() {
        let sut = test_app(ItemStore::new());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/items")
            .header("content-type", "application/json")
            .body(Body::from("not json"))
            .unwrap();
        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = response_body(response).await;
        assert_eq!(body, serde_json::json!({"error": "Invalid request"}));
    }

    #[tokio::test]
    async fn update_with_only_description_keeps_name() {
        let sut = test_app(ItemStore::with_sample_items());

        let response = sut
            .oneshot(json_request(
                Method::PUT,
                "/items/1",
                serde_json::json!({"description": "rewritten"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = response_body(response).await;
        assert_eq!(body["name"], "Item 1");
        assert_eq!(body["description"], "rewritten");
    }

    #[tokio::test]
    async fn update_missing_item_returns_not_found_body_with_200() {
        let sut = test_app(ItemStore::new());

        let response = sut
            .oneshot(json_request(
                Method::PUT,
                "/items/7",
                serde_json::json!({"name": "ghost"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = response_body(response).await;
        assert_eq!(body, serde_json::json!({"error": "Item not found"}));
    }

    #[tokio::test]
    async fn delete_succeeds_for_present_and_absent_ids() {
        let sut = test_app(ItemStore::with_sample_items());

        let response = sut
            .clone()
            .oneshot(empty_request(Method::DELETE, "/items/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = response_body(response).await;
        assert_eq!(body, serde_json::json!({"result": "Item deleted"}));

        // Same body for an id that was never there.
        let response = sut
            .clone()
            .oneshot(empty_request(Method::DELETE, "/items/9999"))
            .await
            .unwrap();
        let body: serde_json::Value = response_body(response).await;
        assert_eq!(body, serde_json::json!({"result": "Item deleted"}));

        let response = sut
            .oneshot(empty_request(Method::GET, "/items/1"))
            .await
            .unwrap();
        let body: serde_json::Value = response_body(response).await;
        assert_eq!(body, serde_json::json!({"error": "Item not found"}));
    }
}
