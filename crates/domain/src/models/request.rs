//! HTTP request model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pair::{PairCollection, from_domain, to_domain};

/// An HTTP request as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpRequest {
    /// Unique identifier.
    pub id: String,
    /// Owning workspace.
    pub workspace_id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Request body.
    #[serde(default)]
    pub body: HttpRequestBody,
}

/// Request body as persisted.
///
/// `form` stays loosely typed: persisted bodies may predate the current
/// shape or be hand-edited, and readers normalize it with [`from_domain`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpRequestBody {
    /// Form entries for url-encoded and multipart bodies.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub form: Value,
}

impl HttpRequestBody {
    /// Creates a body holding the given form pairs.
    #[must_use]
    pub fn from_pairs(pairs: &PairCollection) -> Self {
        Self {
            form: to_domain(pairs),
        }
    }

    /// Returns the normalized form pairs.
    #[must_use]
    pub fn form_pairs(&self) -> PairCollection {
        from_domain(&self.form)
    }
}
