//! Interactive prompt port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Options for a text prompt dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptOptions {
    /// Identifies the prompt (e.g. `new-folder`).
    pub id: String,
    /// Dialog title.
    pub title: String,
    /// Label above the input.
    pub label: String,
    /// Optional help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Initial input value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Placeholder shown when the input is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Confirmation button text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_text: Option<String>,
    /// Cancel button text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_text: Option<String>,
}

impl PromptOptions {
    /// Creates options with the required fields.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the initial value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the confirmation button text.
    #[must_use]
    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }
}

/// Port for asking the user for a line of text.
#[async_trait]
pub trait PromptService: Send + Sync {
    /// Shows a prompt and waits for the answer.
    ///
    /// Returns `None` when the user cancels. Cancellation is an outcome,
    /// not an error.
    async fn prompt(&self, options: PromptOptions) -> Option<String>;
}
