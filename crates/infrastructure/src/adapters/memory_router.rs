//! In-memory router.

use std::sync::Arc;

use async_trait::async_trait;
use courier_application::ApplicationResult;
use courier_application::ports::{NavigateOptions, Navigator, SearchParams, resolve_path};
use tokio::sync::RwLock;

/// A resolved location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    /// Concrete path, e.g. `/workspaces/w1`.
    pub path: String,
    /// Search parameters.
    pub search: SearchParams,
}

#[derive(Debug, Default)]
struct RouterState {
    current: Location,
    history: Vec<Location>,
}

/// Router that keeps the current location and its history in memory.
#[derive(Debug, Clone)]
pub struct InMemoryRouter {
    state: Arc<RwLock<RouterState>>,
}

impl InMemoryRouter {
    /// Creates a router positioned at `/`.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Location {
            path: "/".to_string(),
            search: SearchParams::new(),
        })
    }

    /// Creates a router positioned at `location`.
    #[must_use]
    pub fn starting_at(location: Location) -> Self {
        Self {
            state: Arc::new(RwLock::new(RouterState {
                current: location,
                history: Vec::new(),
            })),
        }
    }

    /// Returns the current location.
    pub async fn current(&self) -> Location {
        self.state.read().await.current.clone()
    }

    /// Returns every location navigated to, oldest first.
    pub async fn history(&self) -> Vec<Location> {
        self.state.read().await.history.clone()
    }
}

impl Default for InMemoryRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Navigator for InMemoryRouter {
    async fn navigate(&self, options: NavigateOptions) -> ApplicationResult<()> {
        let path = resolve_path(&options.to, &options.params)?;
        let mut state = self.state.write().await;

        let search = match options.search {
            Some(update) => update(state.current.search.clone()),
            None => SearchParams::new(),
        };
        let next = Location { path, search };

        tracing::debug!(path = %next.path, "navigate");
        state.history.push(next.clone());
        state.current = next;
        Ok(())
    }
}
