//! Folder model.

use serde::{Deserialize, Serialize};

/// A folder grouping requests within a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique identifier.
    pub id: String,
    /// Owning workspace.
    pub workspace_id: String,
    /// Parent folder, if nested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    /// Human-readable folder name.
    pub name: String,
    /// Sort key among siblings; lower sorts first.
    #[serde(default)]
    pub sort_priority: f64,
}

/// Partial folder used when creating one.
///
/// Every field is optional; the create-folder command fills in what is
/// missing before calling the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderPatch {
    /// Folder name. Prompted for when absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sort key. Defaults to the negated creation time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_priority: Option<f64>,
    /// Parent folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
}

impl FolderPatch {
    /// Creates a patch with a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the parent folder.
    #[must_use]
    pub fn in_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    /// Returns the name if it is present and non-empty.
    #[must_use]
    pub fn provided_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}
