//! Entity models exchanged with the backend command boundary.
//!
//! Wire names are camelCase to match the backend's JSON.

mod folder;
mod request;
mod response;
mod websocket;
mod workspace;

pub use folder::{Folder, FolderPatch};
pub use request::{HttpRequest, HttpRequestBody};
pub use response::HttpResponse;
pub use websocket::WebsocketRequest;
pub use workspace::{Workspace, WorkspacePatch};
