//! Commands dispatched from views through the mutation layer.
//!
//! Each command is built once from a [`CommandContext`] and reused for
//! every invocation. Collaborators are passed in explicitly so tests can
//! substitute them.

mod folder;
mod response;
mod websocket;
mod workspace;

use std::fmt;
use std::sync::Arc;

use courier_domain::{Folder, FolderPatch, HttpResponse, WebsocketRequest, Workspace, WorkspacePatch};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ApplicationError, ApplicationResult};
use crate::mutation::MutationHandle;
use crate::ports::{
    ActiveWorkspace, Analytics, Backend, Clock, Navigator, PromptService, QueryCache,
};

pub use folder::create_folder;
pub use response::delete_response;
pub use websocket::duplicate_websocket_request;
pub use workspace::create_workspace;

/// Route of a workspace's main view.
pub const WORKSPACE_ROUTE: &str = "/workspaces/$workspaceId";

/// Handle creating (or updating) a workspace.
pub type CreateWorkspace = MutationHandle<WorkspacePatch, Workspace, ApplicationError>;
/// Handle creating a folder; resolves to `None` when the user cancels.
pub type CreateFolder = MutationHandle<FolderPatch, Option<Folder>, ApplicationError>;
/// Handle duplicating a WebSocket request by id.
pub type DuplicateWebsocketRequest = MutationHandle<String, WebsocketRequest, ApplicationError>;
/// Handle deleting a response by id.
pub type DeleteResponse = MutationHandle<String, HttpResponse, ApplicationError>;

/// Collaborators shared by all commands.
#[derive(Clone)]
pub struct CommandContext {
    /// Native backend.
    pub backend: Arc<dyn Backend>,
    /// Interactive prompt service.
    pub prompt: Arc<dyn PromptService>,
    /// Application router.
    pub navigator: Arc<dyn Navigator>,
    /// View cache.
    pub cache: Arc<dyn QueryCache>,
    /// Usage tracking.
    pub analytics: Arc<dyn Analytics>,
    /// Active workspace lookup.
    pub workspace: Arc<dyn ActiveWorkspace>,
    /// Time source.
    pub clock: Arc<dyn Clock>,
}

impl fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandContext").finish_non_exhaustive()
    }
}

/// The set of commands available to views.
#[derive(Debug, Clone)]
pub struct Commands {
    /// Create a workspace and open it.
    pub create_workspace: CreateWorkspace,
    /// Create a folder in the active workspace.
    pub create_folder: CreateFolder,
    /// Duplicate a WebSocket request and select the copy.
    pub duplicate_websocket_request: DuplicateWebsocketRequest,
    /// Delete a response and drop it from the cached list.
    pub delete_response: DeleteResponse,
}

impl Commands {
    /// Builds every command. Performs no I/O.
    #[must_use]
    pub fn new(ctx: &CommandContext) -> Self {
        Self {
            create_workspace: create_workspace(ctx),
            create_folder: create_folder(ctx),
            duplicate_websocket_request: duplicate_websocket_request(ctx),
            delete_response: delete_response(ctx),
        }
    }
}

/// Builds `{ name: value }` command arguments.
fn command_args(name: &str, value: &impl Serialize) -> ApplicationResult<Value> {
    let value =
        serde_json::to_value(value).map_err(|e| ApplicationError::Serialization(e.to_string()))?;
    let mut args = Map::new();
    args.insert(name.to_string(), value);
    Ok(Value::Object(args))
}
