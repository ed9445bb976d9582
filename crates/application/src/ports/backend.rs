//! Backend command port.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApplicationError, ApplicationResult};

/// Error type for backend command failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The command ran and was rejected.
    #[error("command `{cmd}` failed: {message}")]
    Command {
        /// Command name.
        cmd: String,
        /// Backend-provided message.
        message: String,
    },

    /// The command could not be delivered.
    #[error("backend transport error: {0}")]
    Transport(String),
}

/// Port for invoking named commands on the native backend.
///
/// The wire format is the backend's concern. The core only sees a named
/// call taking structured arguments and returning a structured result.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Invokes `cmd` with `args`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the command or cannot be
    /// reached.
    async fn invoke(&self, cmd: &str, args: Value) -> Result<Value, BackendError>;
}

/// Invokes a command and deserializes its result.
///
/// # Errors
///
/// Returns `ApplicationError::Backend` for backend failures and
/// `ApplicationError::Serialization` when the result has an unexpected shape.
pub async fn invoke_cmd<T: DeserializeOwned>(
    backend: &dyn Backend,
    cmd: &str,
    args: Value,
) -> ApplicationResult<T> {
    tracing::debug!(cmd, "invoking backend command");
    let value = backend.invoke(cmd, args).await?;
    serde_json::from_value(value)
        .map_err(|e| ApplicationError::Serialization(format!("{cmd}: {e}")))
}
