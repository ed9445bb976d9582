//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the editing core and the surrounding
//! application. Each port is a trait implemented by adapters in the
//! infrastructure layer, or by fakes in tests.

mod active_workspace;
mod analytics;
mod backend;
mod cache;
mod clock;
mod navigator;
mod prompt;
mod view_mode;

pub use active_workspace::ActiveWorkspace;
pub use analytics::Analytics;
pub use backend::{Backend, BackendError, invoke_cmd};
pub use cache::{QueryCache, QueryKey, Updater, get_query_data, set_query_data};
pub use clock::Clock;
pub use navigator::{NavigateOptions, Navigator, SearchParams, SearchUpdater, resolve_path};
pub use prompt::{PromptOptions, PromptService};
pub use view_mode::ViewModeStore;
