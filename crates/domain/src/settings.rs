//! User settings domain model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::editor::EditorMode;

/// Pair-editor preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Preferred display mode per editor preference name
    /// (e.g. `form_urlencoded` → `bulk`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub preferred_modes: BTreeMap<String, EditorMode>,
}

/// User settings for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Tracing filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Pair-editor preferences.
    #[serde(default)]
    pub editor: EditorSettings,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            editor: EditorSettings::default(),
        }
    }
}
