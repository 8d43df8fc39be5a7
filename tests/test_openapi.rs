//! Checks the published API contract and drives the bare router without a
//! listening socket.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use dreaming_flowers::transport::http::{create_router, ApiDoc, AppState};
use dreaming_flowers::{InMemoryShopStore, WritePolicy};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use utoipa::OpenApi;

fn openapi_json() -> Value {
    serde_json::to_value(ApiDoc::openapi()).unwrap()
}

#[test]
fn contract_describes_every_catalog_route() {
    let doc = openapi_json();

    assert_eq!(doc["info"]["title"], "API de Dreaming Flowers");
    assert_eq!(doc["info"]["version"], "1.0.0");

    let paths = &doc["paths"];
    for (path, method) in [
        ("/florerias", "get"),
        ("/florerias/{id}", "get"),
        ("/florerias/{id}", "put"),
        ("/florerias/{id}", "delete"),
        ("/guardar", "post"),
        ("/health", "get"),
    ] {
        assert!(paths[path][method].is_object(), "{} {} missing", method, path);
    }
    assert_eq!(paths["/florerias"]["get"]["tags"], json!(["Florerias"]));
    assert_eq!(paths["/florerias"]["get"]["summary"], "Listado de Florerias");
    assert!(paths["/guardar"]["post"]["responses"]["201"].is_object());
    assert!(paths["/guardar"]["post"]["responses"]["400"].is_object());
}

#[test]
fn incomplete_create_documents_the_error_body() {
    let doc = openapi_json();
    let bad_request = &doc["paths"]["/guardar"]["post"]["responses"]["400"];

    assert_eq!(
        bad_request["content"]["application/json"]["schema"]["$ref"],
        "#/components/schemas/ErrorBody"
    );
    assert!(doc["components"]["schemas"]["ErrorBody"]["properties"]["error"].is_object());
}

#[test]
fn floreria_schema_uses_column_names() {
    let doc = openapi_json();
    let props = &doc["components"]["schemas"]["Floreria"]["properties"];

    for field in ["idfloreria", "nombre", "ubicacion", "telefono"] {
        assert!(props[field].is_object(), "{} missing from Floreria", field);
    }
    let input = &doc["components"]["schemas"]["FloreriaInput"];
    assert_eq!(input["example"]["nombre"], "El girasol de Benja");
}

async fn send(app: axum::Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn router_round_trip_without_a_socket() {
    let store = InMemoryShopStore::new();
    let app = create_router(AppState::new(Arc::new(store.clone()), WritePolicy::Permissive));

    let (status, _) = send(
        app.clone(),
        Method::POST,
        "/guardar",
        Some(json!({"nombre": "Lirio", "ubicacion": "Plaza 3", "telefono": "000123"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(app.clone(), Method::GET, "/florerias", None).await;
    assert_eq!(status, StatusCode::OK);
    let shops: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(shops[0]["telefono"], "000123");

    let id = shops[0]["idfloreria"].as_i64().unwrap();
    let (status, body) = send(app, Method::DELETE, &format!("/florerias/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Floreria eliminada correctamente");
}
