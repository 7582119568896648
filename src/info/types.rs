//! Response payload types for the HTTP surface.
//!
//! Field names and nesting are a fixed wire contract; struct field order is
//! the serialization order consumers see.

use serde::Serialize;
use utoipa::ToSchema;

use super::system::SystemInfo;
use super::uptime::Uptime;
use super::utc_now_rfc3339;

/// Name of the web framework serving the requests.
pub const FRAMEWORK: &str = "Axum";

/// Paths of the known endpoints, in catalog order. Also listed in 404 bodies.
pub const ENDPOINT_PATHS: [&str; 4] = ["/", "/health", "/docs", "/redoc"];

/// Service identity, sourced from the crate manifest.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceInfo {
    /// Service name.
    pub name: String,
    /// Semantic version (X.Y.Z).
    pub version: String,
    /// One-line service description.
    pub description: String,
    /// Web framework in use.
    pub framework: String,
}

impl ServiceInfo {
    /// Build the identity section from the crate manifest, so the manifest
    /// stays the single source of truth for name/version/description.
    pub fn from_manifest() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: env!("CARGO_PKG_DESCRIPTION").to_string(),
            framework: FRAMEWORK.to_string(),
        }
    }
}

/// Runtime facts derived per request.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RuntimeInfo {
    /// Whole seconds since process start.
    pub uptime_seconds: u64,
    /// Human-readable uptime, e.g. "1 hours, 0 minutes".
    pub uptime_human: String,
    /// Current UTC time in RFC 3339 form.
    pub current_time: String,
    /// Always "UTC".
    pub timezone: String,
}

impl RuntimeInfo {
    /// Snapshot the runtime section for the given uptime reading.
    pub fn now(uptime: Uptime) -> Self {
        Self {
            uptime_seconds: uptime.seconds,
            uptime_human: uptime.human,
            current_time: utc_now_rfc3339(),
            timezone: "UTC".to_string(),
        }
    }
}

/// Echo of the incoming request.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RequestInfo {
    /// Transport peer address, or "unknown" when unavailable.
    pub client_ip: String,
    /// User-Agent header verbatim, or "unknown" when absent.
    pub user_agent: String,
    /// HTTP method.
    pub method: String,
    /// Request path.
    pub path: String,
}

/// One entry of the known-endpoint catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EndpointInfo {
    /// Endpoint path.
    pub path: String,
    /// HTTP method.
    pub method: String,
    /// What the endpoint serves.
    pub description: String,
}

impl EndpointInfo {
    fn new(path: &str, method: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            description: description.to_string(),
        }
    }
}

/// The fixed four-entry endpoint catalog, in display order.
pub fn endpoint_catalog() -> Vec<EndpointInfo> {
    vec![
        EndpointInfo::new("/", "GET", "Service information"),
        EndpointInfo::new("/health", "GET", "Health check"),
        EndpointInfo::new("/docs", "GET", "OpenAPI documentation"),
        EndpointInfo::new("/redoc", "GET", "ReDoc documentation"),
    ]
}

/// Full payload for `GET /`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceInfoResponse {
    /// Service identity.
    pub service: ServiceInfo,
    /// Host facts.
    pub system: SystemInfo,
    /// Uptime and clock.
    pub runtime: RuntimeInfo,
    /// Echo of the incoming request.
    pub request: RequestInfo,
    /// Known endpoints.
    pub endpoints: Vec<EndpointInfo>,
}

/// Payload for `GET /health`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy".
    pub status: String,
    /// Current UTC time in RFC 3339 form.
    pub timestamp: String,
    /// Whole seconds since process start.
    pub uptime_seconds: u64,
}
