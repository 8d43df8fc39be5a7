use crate::app::shop_service::{Operation, ShopError, ShopService, WritePolicy};
use crate::domain::shop::validation::MISSING_FIELDS_MESSAGE;
use crate::domain::ValidationError;
use crate::storage::ShopStore;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;
use utoipa::ToSchema;

// Plain-text bodies returned by the catalog routes.
pub const CREATED_MESSAGE: &str = "Floreria creada";
pub const UPDATED_MESSAGE: &str = "Floreria actualizada";
pub const DELETED_MESSAGE: &str = "Floreria eliminada correctamente";
pub const WELCOME_MESSAGE: &str = "Bienvenidos al servidor";
pub const INVALID_ID_MESSAGE: &str = "id de floreria invalido";
pub const NOT_FOUND_MESSAGE: &str = "Floreria no encontrada";

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ShopService>,
}

impl AppState {
    pub fn new(store: Arc<dyn ShopStore>, policy: WritePolicy) -> Self {
        Self {
            service: Arc::new(ShopService::new(store, policy)),
        }
    }
}

/// JSON error body used when a create payload is incomplete.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    /// Fields that were absent or empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    /// `ok` or `unhealthy`.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Status code and static message answered when a store call fails.
pub fn store_failure(operation: Operation) -> (StatusCode, &'static str) {
    match operation {
        Operation::List => (StatusCode::INTERNAL_SERVER_ERROR, "error al obtener las florerias"),
        Operation::Get => (StatusCode::BAD_REQUEST, "error al obtener la floreria"),
        Operation::Create => (StatusCode::BAD_REQUEST, "Error al crear una floreria"),
        Operation::Update => (StatusCode::BAD_REQUEST, "Error al editar una floreria"),
        Operation::Delete => (StatusCode::BAD_REQUEST, "Error al eliminar una floreria"),
        Operation::Health => (StatusCode::SERVICE_UNAVAILABLE, "servicio no disponible"),
    }
}

/// Everything a catalog handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    Shop(ShopError),
    /// The request body was not a JSON object of the expected shape.
    InvalidBody(String),
}

impl From<ShopError> for ApiError {
    fn from(err: ShopError) -> Self {
        ApiError::Shop(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Shop(ShopError::Validation(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidBody(reason) => {
                warn!(%reason, "invalid request body");
                (
                    StatusCode::BAD_REQUEST,
                    format!("Cuerpo de la solicitud invalido: {}", reason),
                )
                    .into_response()
            }
            ApiError::Shop(ShopError::Validation(ValidationError::MissingFields(fields))) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: MISSING_FIELDS_MESSAGE.to_string(),
                    missing: fields.into_iter().map(str::to_string).collect(),
                }),
            )
                .into_response(),
            ApiError::Shop(ShopError::Validation(ValidationError::InvalidId(raw))) => {
                warn!(id = %raw, "rejected non-numeric id");
                (StatusCode::BAD_REQUEST, INVALID_ID_MESSAGE).into_response()
            }
            ApiError::Shop(ShopError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response()
            }
            // The cause was already logged by the service.
            ApiError::Shop(ShopError::Store { operation, .. }) => {
                store_failure(operation).into_response()
            }
        }
    }
}
