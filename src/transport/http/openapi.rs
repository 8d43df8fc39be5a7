//! Declarative API contract, kept apart from route registration.

use crate::domain::{ShopDraft, ShopRecord};
use crate::transport::http::handlers::{health, shops};
use crate::transport::http::types::{ErrorBody, HealthResponse};
use utoipa::OpenApi;

/// Where the interactive documentation UI is served.
pub const DOCS_PATH: &str = "/apis-docs";
/// Where the raw OpenAPI document is served.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Dreaming Flowers",
        version = "1.0.0",
        description = "APi de florerias"
    ),
    paths(
        shops::list_shops,
        shops::get_shop,
        shops::create_shop,
        shops::update_shop,
        shops::delete_shop,
        health::healthcheck_handler
    ),
    components(schemas(ShopRecord, ShopDraft, ErrorBody, HealthResponse)),
    tags(
        (name = "Florerias", description = "API del catálogo de florerias")
    )
)]
pub struct ApiDoc;
