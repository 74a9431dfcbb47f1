use crate::errors::{ApiError, ServiceError};
use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::error;

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Created response carrying a `Location` header for the new resource
pub fn created_response<T: Serialize>(location: String, data: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(data),
    )
        .into_response()
}

/// Success response carrying a `Location` header for the updated resource
pub fn updated_response<T: Serialize>(location: String, data: T) -> Response {
    (StatusCode::OK, [(header::LOCATION, location)], Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Map service errors to API errors
pub fn map_service_error(err: ServiceError) -> ApiError {
    ApiError::ServiceError(err)
}

/// Rejects mutating requests that do not declare a JSON body. Runs before
/// any body parsing so a bad content type always wins with 415.
pub fn require_json_content(headers: &HeaderMap) -> Result<(), ApiError> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .split(';')
                .next()
                .unwrap_or("")
                .trim()
                .eq_ignore_ascii_case("application/json")
        })
        .unwrap_or(false);

    if is_json {
        Ok(())
    } else {
        error!("Request rejected: missing or invalid Content-Type");
        Err(ApiError::UnsupportedMediaType(
            "Content-Type must be application/json".to_string(),
        ))
    }
}

/// Parses a request body into a payload type, mapping malformed JSON to a
/// validation error.
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        ApiError::ValidationError(format!("body of request contained bad or no data: {e}"))
    })
}
