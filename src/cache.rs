//! Read-through memoization for upstream lookups
//!
//! Entries are written once per key and never expire or get evicted. That is
//! only acceptable because keys (countries, city names) are low-cardinality
//! and values are small. The cache is handed to the upstream client instead
//! of living in a global.

use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::Result;
use crate::models::Coordinates;

/// Unbounded key-value store shared across requests
#[derive(Debug)]
pub struct MemoStore<K, V> {
    entries: RwLock<HashMap<K, V>>,
}

impl<K, V> Default for MemoStore<K, V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> MemoStore<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    #[tracing::instrument(name = "query_cache", level = "debug", skip(self))]
    pub async fn get(&self, key: &K) -> Option<V> {
        let found = self.entries.read().await.get(key).cloned();
        if found.is_some() {
            tracing::debug!("Key found");
        } else {
            tracing::debug!("Key not found");
        }
        found
    }

    #[tracing::instrument(name = "put_cache", level = "debug", skip(self, value))]
    pub async fn put(&self, key: K, value: V) {
        self.entries.write().await.insert(key, value);
    }

    /// Returns the cached value or runs `fetch` and stores its result.
    ///
    /// Errors are not cached. Two callers missing the same key at once both
    /// fetch; the later write wins.
    pub async fn get_or_try_fetch<F, Fut>(&self, key: K, fetch: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        if let Some(cached) = self.get(&key).await {
            return Ok(cached);
        }
        let value = fetch().await?;
        self.put(key, value.clone()).await;
        Ok(value)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// The three memoized lookups of the upstream client
#[derive(Debug, Default)]
pub struct LookupCache {
    pub countries: MemoStore<(), Vec<String>>,
    /// Keyed by the country exactly as requested
    pub cities: MemoStore<String, Vec<String>>,
    /// Keyed by the city exactly as requested; misses are cached as `None`
    pub coordinates: MemoStore<String, Option<Coordinates>>,
}

impl LookupCache {
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }
}
