//! View-mode store port.

use courier_domain::EditorMode;

/// Keyed storage for which projection an editor displays.
///
/// Keys are editor state keys (`urlencoded.<request id>`) or preference
/// names (`form_urlencoded`).
pub trait ViewModeStore: Send + Sync {
    /// Returns the stored mode for `key`.
    fn get(&self, key: &str) -> Option<EditorMode>;

    /// Stores the mode for `key`.
    fn set(&self, key: &str, mode: EditorMode);
}
