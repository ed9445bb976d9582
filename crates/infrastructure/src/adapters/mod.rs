//! Infrastructure adapters

mod active_workspace;
mod memory_cache;
mod memory_router;
mod memory_view_modes;
mod system_clock;
mod tracing_analytics;

pub use active_workspace::ActiveWorkspaceState;
pub use memory_cache::InMemoryQueryCache;
pub use memory_router::{InMemoryRouter, Location};
pub use memory_view_modes::InMemoryViewModeStore;
pub use system_clock::SystemClock;
pub use tracing_analytics::TracingAnalytics;
