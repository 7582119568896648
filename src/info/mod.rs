//! Domain layer: uptime math, system facts, and response payloads.

pub mod system;
pub mod types;
pub mod uptime;

pub use system::SystemInfo;
pub use types::{
    endpoint_catalog, EndpointInfo, HealthResponse, RequestInfo, RuntimeInfo, ServiceInfo,
    ServiceInfoResponse, ENDPOINT_PATHS, FRAMEWORK,
};
pub use uptime::Uptime;

use chrono::Utc;

/// Current UTC wall-clock time in RFC 3339 form (ends in `+00:00`).
pub fn utc_now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_are_rfc3339_utc() {
        let now = utc_now_rfc3339();
        assert!(now.contains('T'));
        assert!(now.ends_with("+00:00"));
    }
}
