use crate::handlers::common::{
    created_response, map_service_error, no_content_response, parse_json_body,
    require_json_content, success_response,
};
use crate::{
    dto::{parse_date, WishlistPayload},
    errors::ApiError,
    services::WishlistFilter,
    AppState,
};
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use tracing::info;

/// Creates the router for wishlist endpoints
pub fn wishlists_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_wishlist))
        .route("/", get(list_wishlists))
        .route("/:id", get(get_wishlist))
        .route("/:id", put(update_wishlist))
        .route("/:id", delete(delete_wishlist))
}

/// Create a new wishlist, optionally seeding it with nested items
async fn create_wishlist(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    require_json_content(&headers)?;
    let payload: WishlistPayload = parse_json_body(&body)?;
    let input = payload.validate()?;

    let wishlist = state
        .services
        .wishlists
        .create(input)
        .await
        .map_err(map_service_error)?;

    let location = format!("/wishlists/{}", wishlist.id());
    Ok(created_response(location, wishlist))
}

/// Get a wishlist with its items
async fn get_wishlist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let wishlist = state
        .services
        .wishlists
        .get(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(wishlist))
}

/// Query parameters for listing wishlists. Mutually exclusive; the first
/// one present (in declaration order) wins.
#[derive(Debug, Default, Deserialize)]
struct ListWishlistsQuery {
    name: Option<String>,
    userid: Option<String>,
    date_created: Option<String>,
    since_date: Option<String>,
}

impl ListWishlistsQuery {
    fn into_filter(self) -> Result<WishlistFilter, ApiError> {
        let present = |value: Option<String>| value.filter(|s| !s.is_empty());

        if let Some(name) = present(self.name) {
            return Ok(WishlistFilter::Name(name));
        }
        if let Some(userid) = present(self.userid) {
            return Ok(WishlistFilter::Userid(userid));
        }
        if let Some(raw) = present(self.date_created) {
            return Ok(WishlistFilter::CreatedOn(
                parse_date(&raw).map_err(ApiError::ValidationError)?,
            ));
        }
        if let Some(raw) = present(self.since_date) {
            return Ok(WishlistFilter::CreatedSince(
                parse_date(&raw).map_err(ApiError::ValidationError)?,
            ));
        }
        Ok(WishlistFilter::All)
    }
}

/// List wishlists, optionally filtered by name, userid or creation date
async fn list_wishlists(
    State(state): State<AppState>,
    Query(params): Query<ListWishlistsQuery>,
) -> Result<Response, ApiError> {
    let filter = params.into_filter()?;
    info!("Listing wishlists with filter {:?}", filter);

    let wishlists = state
        .services
        .wishlists
        .list(filter)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(wishlists))
}

/// Replace a wishlist's fields, preserving its id
async fn update_wishlist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    require_json_content(&headers)?;
    let payload: WishlistPayload = parse_json_body(&body)?;
    let input = payload.validate()?;

    let wishlist = state
        .services
        .wishlists
        .update(id, input)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(wishlist))
}

/// Delete a wishlist and its items; 204 whether or not it existed
async fn delete_wishlist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    state
        .services
        .wishlists
        .delete(id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}
