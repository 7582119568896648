//! HTTP API route definitions.

use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{health, not_found, service_info, AppState};
use crate::error::handle_panic;
use crate::openapi::ApiDoc;

/// Create the API router.
///
/// Routes, documentation UIs, the 404 fallback, and the middleware stack
/// (request tracing, permissive CORS, panic-to-500 conversion).
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Read-only endpoints
        .route("/", get(service_info))
        .route("/health", get(health))
        // Documentation UIs
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        // Structured 404 for everything else
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}
