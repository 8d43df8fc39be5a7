use crate::domain::ShopId;
use crate::transport::http::types::{ApiError, WELCOME_MESSAGE};
use axum::extract::rejection::JsonRejection;
use axum::Json;

/// Strictly parses the `{id}` path segment.
pub fn parse_shop_id(raw: &str) -> Result<ShopId, ApiError> {
    Ok(raw.parse::<ShopId>()?)
}

/// Unwraps a JSON body, turning extractor rejections into a 400.
pub fn read_json<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(v)| v)
        .map_err(|e| ApiError::InvalidBody(e.body_text()))
}

/// Greeting kept from the first version of the service.
pub async fn welcome_handler() -> &'static str {
    WELCOME_MESSAGE
}
