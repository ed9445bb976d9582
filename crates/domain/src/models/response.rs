//! HTTP response model.

use serde::{Deserialize, Serialize};

/// A stored response to an HTTP request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    /// Unique identifier.
    pub id: String,
    /// The request this response belongs to.
    pub request_id: String,
    /// Owning workspace.
    pub workspace_id: String,
    /// HTTP status code; 0 while the response is still streaming.
    #[serde(default)]
    pub status: u16,
}
