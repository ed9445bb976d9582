//! Analytics port.

/// Fire-and-forget usage tracking.
///
/// Implementations must not fail or block; tracking is never allowed to
/// affect the outcome of the action being tracked.
pub trait Analytics: Send + Sync {
    /// Records that `action` happened to `resource` (e.g. `folder`, `create`).
    fn track_event(&self, resource: &str, action: &str);
}
