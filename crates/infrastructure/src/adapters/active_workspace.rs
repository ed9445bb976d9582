//! Active workspace holder.

use std::sync::Arc;

use courier_application::ports::ActiveWorkspace;
use parking_lot::RwLock;

/// Shared, settable record of the active workspace.
#[derive(Debug, Clone, Default)]
pub struct ActiveWorkspaceState {
    id: Arc<RwLock<Option<String>>>,
}

impl ActiveWorkspaceState {
    /// Creates a state with no active workspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state with `id` active.
    #[must_use]
    pub fn with_active(id: impl Into<String>) -> Self {
        let state = Self::new();
        state.activate(id);
        state
    }

    /// Makes `id` the active workspace.
    pub fn activate(&self, id: impl Into<String>) {
        *self.id.write() = Some(id.into());
    }

    /// Leaves the current workspace.
    pub fn clear(&self) {
        *self.id.write() = None;
    }
}

impl ActiveWorkspace for ActiveWorkspaceState {
    fn active_workspace_id(&self) -> Option<String> {
        self.id.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_and_clear() {
        let state = ActiveWorkspaceState::new();
        assert_eq!(state.active_workspace_id(), None);

        let shared = state.clone();
        shared.activate("w1");
        assert_eq!(state.active_workspace_id().as_deref(), Some("w1"));

        state.clear();
        assert_eq!(shared.active_workspace_id(), None);
    }
}
