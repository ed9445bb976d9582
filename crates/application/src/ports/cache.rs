//! Query cache port.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Key of one cache entry, made of ordered segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    /// Creates a key from its segments.
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Key of the responses list for one request.
    #[must_use]
    pub fn responses(request_id: &str) -> Self {
        Self::new(["responses", request_id])
    }

    /// Key of the folders list for one workspace.
    #[must_use]
    pub fn folders(workspace_id: &str) -> Self {
        Self::new(["folders", workspace_id])
    }

    /// Returns the key segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Derives the next value of an entry from its prior value.
pub type Updater = Box<dyn FnOnce(Option<Value>) -> Value + Send>;

/// Port for the keyed view cache.
///
/// Entries are replaced structurally through updater functions. Concurrent
/// updates commute only when they touch different keys, so callers key
/// entries by entity id.
pub trait QueryCache: Send + Sync {
    /// Returns the current value for `key`.
    fn get(&self, key: &QueryKey) -> Option<Value>;

    /// Replaces the value for `key` with `updater(prior)`.
    ///
    /// Implementations apply the updater atomically with respect to other
    /// updates of the same key.
    fn set(&self, key: QueryKey, updater: Updater);
}

/// Reads and deserializes a cache entry.
///
/// An entry of the wrong shape reads as absent.
pub fn get_query_data<T: DeserializeOwned>(cache: &dyn QueryCache, key: &QueryKey) -> Option<T> {
    let value = cache.get(key)?;
    serde_json::from_value(value)
        .map_err(|e| tracing::debug!(%key, error = %e, "ignoring malformed cache entry"))
        .ok()
}

/// Updates a cache entry through a typed updater.
///
/// A prior value of the wrong shape is passed to `update` as `None`.
pub fn set_query_data<T, F>(cache: &dyn QueryCache, key: QueryKey, update: F)
where
    T: Serialize + DeserializeOwned,
    F: FnOnce(Option<T>) -> T + Send + 'static,
{
    let entry = key.to_string();
    cache.set(
        key,
        Box::new(move |prior: Option<Value>| {
            let typed = prior.clone().and_then(|v| serde_json::from_value(v).ok());
            serde_json::to_value(update(typed)).unwrap_or_else(|e| {
                tracing::warn!(key = %entry, error = %e, "cache update not serializable, keeping prior value");
                prior.unwrap_or(Value::Null)
            })
        }),
    );
}
