//! OpenAPI 3 documentation assembly.
//!
//! Aggregates the handler path annotations and payload schemas into a
//! single document, served through Swagger UI at `/docs` and ReDoc at
//! `/redoc`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DevOps Info Service",
        description = "Service providing system information and health status"
    ),
    tags(
        (name = "info", description = "Service and system metadata"),
        (name = "health", description = "Monitoring probes"),
    ),
    paths(
        crate::api::handlers::service_info,
        crate::api::handlers::health,
    ),
    components(schemas(
        crate::info::types::ServiceInfoResponse,
        crate::info::types::ServiceInfo,
        crate::info::types::RuntimeInfo,
        crate::info::types::RequestInfo,
        crate::info::types::EndpointInfo,
        crate::info::types::HealthResponse,
        crate::info::system::SystemInfo,
        crate::error::ErrorResponse,
    )),
)]
pub struct ApiDoc;
