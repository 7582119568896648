//! Uptime derived from the process start instant.

use std::time::Instant;

/// Elapsed time since process start.
///
/// Derived from a monotonic [`Instant`], so the seconds value can never
/// decrease across the process lifetime regardless of wall-clock steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uptime {
    /// Whole seconds since start (truncated, never rounded up).
    pub seconds: u64,
    /// Human-readable form, e.g. "1 hours, 0 minutes".
    pub human: String,
}

impl Uptime {
    /// Build uptime from a whole-second count.
    pub fn from_seconds(seconds: u64) -> Self {
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;

        Self {
            seconds,
            human: format!("{} hours, {} minutes", hours, minutes),
        }
    }

    /// Compute uptime elapsed since the given start instant.
    pub fn since(started_at: Instant) -> Self {
        Self::from_seconds(started_at.elapsed().as_secs())
    }
}
