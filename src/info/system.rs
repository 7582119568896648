//! Live system facts with documented fallbacks.

use serde::Serialize;
use sysinfo::System;
use utoipa::ToSchema;

/// Facts about the host the service is running on.
///
/// Read fresh on every request. A fact the operating environment does not
/// expose degrades to a default instead of erroring: "unknown" for names,
/// the compile-time target for platform/architecture, 0 for `cpu_count`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SystemInfo {
    /// Host name.
    pub hostname: String,
    /// Operating system name (e.g. "Ubuntu", "macOS").
    pub platform: String,
    /// Operating system version.
    pub platform_version: String,
    /// CPU architecture (e.g. "x86_64", "aarch64").
    pub architecture: String,
    /// Logical CPU count.
    pub cpu_count: usize,
    /// Version of the compiler this binary was built with.
    pub rust_version: String,
}

impl SystemInfo {
    /// Read the current system facts.
    pub fn collect() -> Self {
        Self {
            hostname: System::host_name().unwrap_or_else(|| "unknown".to_string()),
            platform: System::name().unwrap_or_else(|| std::env::consts::OS.to_string()),
            platform_version: System::os_version().unwrap_or_else(|| "unknown".to_string()),
            architecture: System::cpu_arch().unwrap_or_else(|| std::env::consts::ARCH.to_string()),
            cpu_count: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(0),
            rust_version: env!("RUSTC_VERSION").to_string(),
        }
    }
}
