use axum::{Router, routing::get};
use axum_helpers::server::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod health;
pub mod items;
pub mod root;

/// Creates the API routes.
///
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/items", items::router(state))
        .merge(root::router(state.config.storage))
        .merge(ready_router(state.clone()))
}

/// Router with the /ready endpoint that checks the storage backend.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// Full application: API routes, `/health`, docs and middleware.
pub fn app(state: &AppState) -> std::io::Result<Router> {
    let apis = routes(state).merge(health_router(state.config.app));
    create_router::<ApiDoc>(apis, &state.config.server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment, StorageBackend};
    use crate::state::Storage;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use domain_items::InMemoryItemRepository;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn memory_app() -> Router {
        let state = AppState {
            config: Config {
                app: app_info!("Items REST API"),
                server: ServerConfig::default(),
                environment: Environment::Development,
                storage: StorageBackend::Memory,
                database: None,
            },
            storage: Storage::Memory(InMemoryItemRepository::new()),
        };
        app(&state).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_root_banner() {
        let (status, body) = send(&memory_app(), get("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Welcome to Items REST API");
        assert_eq!(body["endpoints"]["GET /items"], "Get all items");
        assert_eq!(body["endpoints"].as_object().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_health_and_ready() {
        let app = memory_app();

        let (status, body) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"status": "healthy", "service": "Items REST API", "version": "1.0.0"})
        );

        let (status, body) = send(&app, get("/ready")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ready"}));
    }

    #[tokio::test]
    async fn test_items_are_nested_under_items() {
        let app = memory_app();

        let create = Request::post("/items")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({"name": "Widget", "price": 9.99, "quantity": 5}).to_string(),
            ))
            .unwrap();
        let (status, created) = send(&app, create).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 1);

        let (status, list) = send(&app, get("/items")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([created]));

        let (status, body) = send(&app, get("/items/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, created);

        let delete = Request::delete("/items/1").body(Body::empty()).unwrap();
        let (status, body) = send(&app, delete).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["deleted_item"], created);

        let (status, body) = send(&app, get("/items/1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Item not found");
    }

    #[tokio::test]
    async fn test_openapi_lists_item_paths() {
        let (status, doc) = send(&memory_app(), get("/api-docs/openapi.json")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"]["/items"].is_object());
        assert!(doc["paths"]["/items/{id}"].is_object());
        assert!(doc["paths"]["/health"].is_object());
    }

    #[tokio::test]
    async fn test_security_headers_on_every_route() {
        let app = memory_app();

        for uri in ["/", "/health", "/ready", "/items"] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
            assert_eq!(
                response.headers().get("x-frame-options").map(|v| v.as_bytes()),
                Some(&b"DENY"[..]),
                "{}",
                uri
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = send(&memory_app(), get("/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
