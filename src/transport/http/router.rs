use crate::transport::http::handlers::{common, health, shops};
use crate::transport::http::openapi::{ApiDoc, DOCS_PATH, OPENAPI_JSON_PATH};
use crate::transport::http::types::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Catalog, health and welcome routes, without middleware or docs.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/patito", get(common::welcome_handler))
        .route("/health", get(health::healthcheck_handler))
        .route("/florerias", get(shops::list_shops))
        .route(
            "/florerias/:id",
            get(shops::get_shop)
                .put(shops::update_shop)
                .delete(shops::delete_shop),
        )
        .route("/guardar", post(shops::create_shop))
        .with_state(app_state)
}

/// The full application: routes, Swagger UI, request tracing, a per-request
/// timeout (answered with 408) and permissive CORS.
pub fn build_app(app_state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    create_router(app_state)
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
