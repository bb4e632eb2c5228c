//! OpenAPI documentation for the plain HTTP endpoints

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::health;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "0.1.0",
        description = "Service endpoints of the Bookshelf server. The catalog itself is served over GraphQL at /graphql."
    ),
    paths(health::health_check, health::readiness_check),
    components(schemas(health::HealthResponse, crate::error::ErrorResponse)),
    tags(
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
