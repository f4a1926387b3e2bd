use crate::handlers::{
    create_item, delete_item, get_item, health_check, list_items, ready_check, update_item,
    welcome,
};
use crate::store::SharedStore;
use axum::{routing::get, Router};

/// Create API routes
///
/// The routing table is explicit: one line per method+path pair, all bound
/// to the shared store state.
pub fn create_api_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
        .with_state(store)
}
