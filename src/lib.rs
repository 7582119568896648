//! DevOps info service.
//!
//! A minimal HTTP service with two read-only endpoints: a root endpoint
//! returning service/system/runtime/request metadata and a health-check
//! endpoint for monitoring probes.
//!
//! Every request is independent and stateless; the only process-wide value
//! is the start instant uptime is computed from.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Structured 404/500 responses
//! - [`info`]: Uptime math, system facts, and response payloads
//! - [`api`]: HTTP handlers and router
//! - [`openapi`]: OpenAPI documentation
//! - [`metrics`]: Request counters
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod info;
pub mod metrics;
pub mod openapi;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, ErrorResponse};
