use crate::handlers::common::{
    created_response, map_service_error, no_content_response, parse_json_body,
    require_json_content, success_response, updated_response,
};
use crate::{dto::ItemPayload, errors::ApiError, AppState};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
    routing::{delete, get, post, put},
    Router,
};

/// Creates the router for item endpoints, mounted under the wishlists prefix
pub fn items_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/items", get(list_items))
        .route("/:id/items", post(create_item))
        .route("/:id/items/:item_id", get(get_item))
        .route("/:id/items/:item_id", put(update_item))
        .route("/:id/items/:item_id", delete(delete_item))
        .route("/:id/items/:item_id/purchase", put(purchase_item))
}

/// List all items in a wishlist
async fn list_items(
    State(state): State<AppState>,
    Path(wishlist_id): Path<i32>,
) -> Result<Response, ApiError> {
    let items = state
        .services
        .items
        .list(wishlist_id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(items))
}

/// Add a new item to a wishlist. The owning wishlist comes from the path;
/// any `wishlist_id` in the body is ignored.
async fn create_item(
    State(state): State<AppState>,
    Path(wishlist_id): Path<i32>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    require_json_content(&headers)?;
    let payload: ItemPayload = parse_json_body(&body)?;
    let input = payload.validate()?;

    let item = state
        .services
        .items
        .create(wishlist_id, input)
        .await
        .map_err(map_service_error)?;

    let location = format!("/wishlists/{}/items/{}", wishlist_id, item.id);
    Ok(created_response(location, item))
}

/// Get a single item from a wishlist
async fn get_item(
    State(state): State<AppState>,
    Path((wishlist_id, item_id)): Path<(i32, i32)>,
) -> Result<Response, ApiError> {
    let item = state
        .services
        .items
        .get(wishlist_id, item_id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(item))
}

/// Update an item's name, description and price
async fn update_item(
    State(state): State<AppState>,
    Path((wishlist_id, item_id)): Path<(i32, i32)>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    require_json_content(&headers)?;
    let payload: ItemPayload = parse_json_body(&body)?;
    let input = payload.validate()?;

    let item = state
        .services
        .items
        .update(wishlist_id, item_id, input)
        .await
        .map_err(map_service_error)?;

    let location = format!("/wishlists/{}/items/{}", wishlist_id, item.id);
    Ok(updated_response(location, item))
}

/// Delete an item from a wishlist
async fn delete_item(
    State(state): State<AppState>,
    Path((wishlist_id, item_id)): Path<(i32, i32)>,
) -> Result<Response, ApiError> {
    state
        .services
        .items
        .delete(wishlist_id, item_id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

/// Mark an item as purchased
async fn purchase_item(
    State(state): State<AppState>,
    Path((wishlist_id, item_id)): Path<(i32, i32)>,
) -> Result<Response, ApiError> {
    let item = state
        .services
        .items
        .purchase(wishlist_id, item_id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(item))
}
