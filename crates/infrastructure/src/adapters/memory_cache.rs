//! In-memory query cache.

use std::collections::HashMap;
use std::sync::Arc;

use courier_application::ports::{QueryCache, QueryKey, Updater};
use parking_lot::RwLock;
use serde_json::Value;

/// Thread-safe in-memory view cache.
///
/// Updaters run while the entry map is write-locked, so an updater must not
/// call back into the same cache.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQueryCache {
    entries: Arc<RwLock<HashMap<QueryKey, Value>>>,
}

impl InMemoryQueryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any prior value.
    pub fn insert(&self, key: QueryKey, value: Value) {
        self.entries.write().insert(key, value);
    }

    /// Removes the entry for `key`.
    pub fn remove(&self, key: &QueryKey) -> Option<Value> {
        self.entries.write().remove(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl QueryCache for InMemoryQueryCache {
    fn get(&self, key: &QueryKey) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: QueryKey, updater: Updater) {
        let mut entries = self.entries.write();
        let prior = entries.remove(&key);
        let next = updater(prior);
        tracing::trace!(%key, "cache entry updated");
        entries.insert(key, next);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use courier_application::ports::{get_query_data, set_query_data};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_set_receives_prior_value() {
        let cache = InMemoryQueryCache::new();
        let key = QueryKey::new(["counter"]);

        cache.set(key.clone(), Box::new(|prior: Option<Value>| {
            assert!(prior.is_none());
            json!(1)
        }));
        cache.set(key.clone(), Box::new(|prior: Option<Value>| {
            json!(prior.and_then(|v| v.as_i64()).unwrap_or(0) + 1)
        }));

        assert_eq!(cache.get(&key), Some(json!(2)));
    }

    #[test]
    fn test_typed_helpers() {
        let cache = InMemoryQueryCache::new();
        let key = QueryKey::responses("r1");
        cache.insert(key.clone(), json!(["a", "b", "c"]));

        set_query_data(&cache, key.clone(), |prior: Option<Vec<String>>| {
            prior.unwrap_or_default().into_iter().filter(|id| id != "b").collect()
        });

        let ids: Vec<String> = get_query_data(&cache, &key).unwrap();
        assert_eq!(ids, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_malformed_entry_reads_as_absent() {
        let cache = InMemoryQueryCache::new();
        let key = QueryKey::folders("w1");
        cache.insert(key.clone(), json!("not a list"));

        let folders: Option<Vec<String>> = get_query_data(&cache, &key);
        assert!(folders.is_none());
    }

    #[test]
    fn test_keys_are_independent() {
        let cache = InMemoryQueryCache::new();
        cache.insert(QueryKey::folders("w1"), json!([]));
        cache.insert(QueryKey::folders("w2"), json!([1]));
        assert_eq!(cache.len(), 2);

        cache.remove(&QueryKey::folders("w1"));
        assert_eq!(cache.get(&QueryKey::folders("w2")), Some(json!([1])));
        assert_eq!(cache.get(&QueryKey::folders("w1")), None);

        cache.clear();
        assert!(cache.is_empty());
    }
}
