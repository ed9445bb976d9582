//! In-memory view-mode store.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use courier_application::ports::ViewModeStore;
use courier_domain::{EditorMode, EditorSettings};
use parking_lot::RwLock;

/// View-mode store held in memory, seeded from persisted preferences.
#[derive(Debug, Clone, Default)]
pub struct InMemoryViewModeStore {
    modes: Arc<RwLock<HashMap<String, EditorMode>>>,
}

impl InMemoryViewModeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the preferred modes from `settings`.
    #[must_use]
    pub fn from_settings(settings: &EditorSettings) -> Self {
        let modes = settings
            .preferred_modes
            .iter()
            .map(|(name, mode)| (name.clone(), *mode))
            .collect();
        Self {
            modes: Arc::new(RwLock::new(modes)),
        }
    }

    /// Returns every stored key and mode, sorted by key.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, EditorMode> {
        self.modes
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect()
    }

    /// Extracts the modes stored under `preference_names` for persisting.
    ///
    /// Per-editor state keys are session state and are left out.
    #[must_use]
    pub fn editor_settings(&self, preference_names: &[&str]) -> EditorSettings {
        let modes = self.modes.read();
        EditorSettings {
            preferred_modes: preference_names
                .iter()
                .filter_map(|name| modes.get(*name).map(|mode| ((*name).to_string(), *mode)))
                .collect(),
        }
    }
}

impl ViewModeStore for InMemoryViewModeStore {
    fn get(&self, key: &str) -> Option<EditorMode> {
        self.modes.read().get(key).copied()
    }

    fn set(&self, key: &str, mode: EditorMode) {
        self.modes.write().insert(key.to_string(), mode);
    }
}
