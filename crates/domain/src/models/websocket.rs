//! WebSocket request model.

use serde::{Deserialize, Serialize};

/// A saved WebSocket connection request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsocketRequest {
    /// Unique identifier.
    pub id: String,
    /// Owning workspace.
    pub workspace_id: String,
    /// Parent folder, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Connection URL.
    #[serde(default)]
    pub url: String,
}
