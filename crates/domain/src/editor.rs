//! Editor display state shared by pair and text editors.

use serde::{Deserialize, Serialize};

/// Which projection of a pair collection is authoritative for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// One row per pair with name, value and enabled toggle.
    #[default]
    Structured,
    /// Freeform newline-delimited text.
    Bulk,
}

impl EditorMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Structured => Self::Bulk,
            Self::Bulk => Self::Structured,
        }
    }

    /// Returns true for the bulk-text mode.
    #[must_use]
    pub const fn is_bulk(self) -> bool {
        matches!(self, Self::Bulk)
    }
}

/// Identity of one mounted editor instance.
///
/// `state_key` scopes persisted UI state to a logical owner (for example
/// `urlencoded.<request id>`). `force_update_key` lets the caller discard
/// cached editor state after a programmatic change to the underlying value.
/// Two equal keys denote the same mounted instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditorKey {
    /// Scope of persisted UI state.
    pub state_key: String,
    /// Remount discriminator.
    pub force_update_key: String,
}

impl EditorKey {
    /// Creates a key from its two parts.
    #[must_use]
    pub fn new(state_key: impl Into<String>, force_update_key: impl Into<String>) -> Self {
        Self {
            state_key: state_key.into(),
            force_update_key: force_update_key.into(),
        }
    }
}
