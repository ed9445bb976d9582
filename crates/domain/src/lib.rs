//! Courier Domain - Core editing types
//!
//! This crate defines the pair model shared by form bodies, headers and
//! query parameters, its bulk-text projection, and the entity models the
//! command layer exchanges with the backend.
//! All types here are pure Rust with no I/O dependencies.

pub mod editor;
pub mod error;
pub mod id;
pub mod models;
pub mod pair;
pub mod settings;

pub use editor::{EditorKey, EditorMode};
pub use error::{DomainError, DomainResult};
pub use id::generate_id;
pub use models::{
    Folder, FolderPatch, HttpRequest, HttpRequestBody, HttpResponse, WebsocketRequest, Workspace,
    WorkspacePatch,
};
pub use pair::{
    DISABLED_MARKER, FormField, Pair, PairCollection, from_bulk_text, from_bulk_text_with_ids,
    from_domain, to_bulk_text, to_domain,
};
pub use settings::{EditorSettings, Settings};
