//! Active workspace port.

/// Reports which workspace the user is currently in.
pub trait ActiveWorkspace: Send + Sync {
    /// Returns the active workspace id, or `None` outside any workspace.
    fn active_workspace_id(&self) -> Option<String>;
}
