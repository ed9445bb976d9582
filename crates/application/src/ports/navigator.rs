//! Navigation port.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;

use crate::error::{ApplicationError, ApplicationResult};

/// Search parameters of a location.
pub type SearchParams = BTreeMap<String, String>;

/// Derives the next search parameters from the previous ones.
pub type SearchUpdater = Box<dyn FnOnce(SearchParams) -> SearchParams + Send>;

/// A navigation request.
pub struct NavigateOptions {
    /// Path template, with `$name` segments (e.g. `/workspaces/$workspaceId`).
    pub to: String,
    /// Values for the template's `$name` segments.
    pub params: BTreeMap<String, String>,
    /// Optional search update; `None` clears the search parameters.
    pub search: Option<SearchUpdater>,
}

impl NavigateOptions {
    /// Creates a navigation to `to` with no params.
    #[must_use]
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            params: BTreeMap::new(),
            search: None,
        }
    }

    /// Adds a path parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Sets the search updater.
    #[must_use]
    pub fn search(mut self, update: impl FnOnce(SearchParams) -> SearchParams + Send + 'static) -> Self {
        self.search = Some(Box::new(update));
        self
    }
}

impl fmt::Debug for NavigateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigateOptions")
            .field("to", &self.to)
            .field("params", &self.params)
            .field("search", &self.search.is_some())
            .finish()
    }
}

/// Port for the application router.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Navigates to the given location.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be resolved.
    async fn navigate(&self, options: NavigateOptions) -> ApplicationResult<()>;
}

/// Substitutes `$name` segments of `template` with `params`.
///
/// # Errors
///
/// Returns `ApplicationError::Navigation` if a segment has no parameter.
pub fn resolve_path(template: &str, params: &BTreeMap<String, String>) -> ApplicationResult<String> {
    let segments = template
        .split('/')
        .map(|segment| match segment.strip_prefix('$') {
            Some(name) => params.get(name).map(String::as_str).ok_or_else(|| {
                ApplicationError::Navigation(format!("missing path param `{name}` for {template}"))
            }),
            None => Ok(segment),
        })
        .collect::<ApplicationResult<Vec<_>>>()?;
    Ok(segments.join("/"))
}
