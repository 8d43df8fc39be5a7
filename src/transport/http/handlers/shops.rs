use crate::domain::{ShopDraft, ShopRecord};
use crate::transport::http::handlers::common::{parse_shop_id, read_json};
use crate::transport::http::types::{
    ApiError, AppState, CREATED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

/// Listado de Florerias
#[utoipa::path(
    get,
    path = "/florerias",
    tag = "Florerias",
    responses(
        (status = 200, description = "Muestra la lista de florerias", body = [ShopRecord]),
        (status = 500, description = "No se pudo consultar la base de datos", body = String, content_type = "text/plain")
    )
)]
pub async fn list_shops(State(state): State<AppState>) -> Result<Json<Vec<ShopRecord>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

/// Detalle de Floreria
///
/// Answers an array with zero or one element; an unknown id is not an error.
#[utoipa::path(
    get,
    path = "/florerias/{id}",
    tag = "Florerias",
    params(
        ("id" = i32, Path, description = "Id de la floreria")
    ),
    responses(
        (status = 200, description = "La floreria, o un arreglo vacio si no existe", body = [ShopRecord]),
        (status = 400, description = "Id invalido o error al obtener la floreria", body = String, content_type = "text/plain")
    )
)]
pub async fn get_shop(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ShopRecord>>, ApiError> {
    let id = parse_shop_id(&id)?;
    let found = state.service.get(id).await?;
    Ok(Json(found.into_iter().collect()))
}

/// Crear florerias
#[utoipa::path(
    post,
    path = "/guardar",
    tag = "Florerias",
    request_body = ShopDraft,
    responses(
        (status = 201, description = "Guardar nueva floreria", body = String, content_type = "text/plain",
            headers(("Location" = String, description = "Ruta de la floreria creada"))),
        (status = 400, description = "Datos incompletos", body = crate::transport::http::types::ErrorBody)
    )
)]
pub async fn create_shop(
    State(state): State<AppState>,
    body: Result<Json<ShopDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = read_json(body)?;
    let id = state.service.create(draft).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/florerias/{}", id))],
        CREATED_MESSAGE,
    ))
}

/// Editar florerias
///
/// Overwrites all three fields. Whether incomplete payloads and unknown ids are
/// accepted depends on the configured write policy.
#[utoipa::path(
    put,
    path = "/florerias/{id}",
    tag = "Florerias",
    params(
        ("id" = i32, Path, description = "Id de la floreria")
    ),
    request_body = ShopDraft,
    responses(
        (status = 200, description = "Floreria actualizada", body = String, content_type = "text/plain"),
        (status = 400, description = "No se edita la floreria", body = String, content_type = "text/plain"),
        (status = 404, description = "La floreria no existe (solo con STRICT_WRITES)", body = String, content_type = "text/plain")
    )
)]
pub async fn update_shop(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ShopDraft>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let id = parse_shop_id(&id)?;
    let draft = read_json(body)?;
    state.service.update(id, draft).await?;
    Ok(UPDATED_MESSAGE)
}

/// Eliminacion de Floreria
#[utoipa::path(
    delete,
    path = "/florerias/{id}",
    tag = "Florerias",
    params(
        ("id" = i32, Path, description = "Id de la floreria")
    ),
    responses(
        (status = 200, description = "Elimina una floreria", body = String, content_type = "text/plain"),
        (status = 400, description = "Error al eliminar la floreria", body = String, content_type = "text/plain"),
        (status = 404, description = "La floreria no existe (solo con STRICT_WRITES)", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_shop(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    let id = parse_shop_id(&id)?;
    state.service.delete(id).await?;
    Ok(DELETED_MESSAGE)
}
