use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(crate::api::root::index, axum_helpers::server::health::health_handler, crate::api::health::ready_handler),
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse, crate::api::root::RootResponse)
    ),
    info(
        title = "Items REST API",
        version = "1.0.0",
        description = "CRUD API for items backed by an in-memory store or PostgreSQL"
    ),
    nest(
        (path = "/items", api = domain_items::ApiDoc)
    ),
    tags(
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
