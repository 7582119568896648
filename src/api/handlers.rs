//! HTTP API handlers.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, State};
use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, Method, Uri};
use axum::Json;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::info::{
    endpoint_catalog, utc_now_rfc3339, HealthResponse, RequestInfo, RuntimeInfo, ServiceInfo,
    ServiceInfoResponse, SystemInfo, Uptime,
};
use crate::metrics;

/// Application state shared with handlers.
///
/// The start instant is the only process-wide value: written once here,
/// read everywhere else, so no synchronization is needed.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    /// Monotonic instant the process started at.
    pub started_at: Instant,
}

impl AppState {
    /// Create app state anchored at the current instant.
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Uptime elapsed since the start instant.
    pub fn uptime(&self) -> Uptime {
        Uptime::since(self.started_at)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Service information handler: assembles the full metadata payload from
/// live system calls and the incoming request.
#[utoipa::path(
    get,
    path = "/",
    tag = "info",
    responses(
        (status = 200, description = "Service, system, runtime, and request metadata", body = ServiceInfoResponse)
    )
)]
pub async fn service_info(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
) -> Json<ServiceInfoResponse> {
    info!("Request received: {} {}", method, uri.path());
    metrics::inc_info_requests();

    let client_ip = connect_info
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    Json(ServiceInfoResponse {
        service: ServiceInfo::from_manifest(),
        system: SystemInfo::collect(),
        runtime: RuntimeInfo::now(state.uptime()),
        request: RequestInfo {
            client_ip,
            user_agent,
            method: method.to_string(),
            path: uri.path().to_string(),
        },
        endpoints: endpoint_catalog(),
    })
}

/// Health check handler for monitoring probes: always healthy, cheap
/// enough to poll every few seconds.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    metrics::inc_health_checks();

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: utc_now_rfc3339(),
        uptime_seconds: state.uptime().seconds,
    })
}

/// Fallback for unregistered paths.
pub async fn not_found(uri: Uri) -> ApiError {
    warn!("No route for {}", uri.path());
    metrics::inc_unmatched_routes();

    ApiError::NotFound {
        path: uri.path().to_string(),
    }
}
