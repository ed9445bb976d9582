//! Analytics adapter that records events as tracing events.

use courier_application::ports::Analytics;

/// Emits each tracked event at `info` under the `courier::analytics` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl TracingAnalytics {
    /// Creates the adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Analytics for TracingAnalytics {
    fn track_event(&self, resource: &str, action: &str) {
        tracing::info!(target: "courier::analytics", resource, action, "track event");
    }
}
