//! Keyed query cache with generation-guarded fills.
//!
//! Each domain carries a generation counter bumped by every invalidation
//! touching it. A miss records the generation before fetching and only
//! stores the result if the generation is unchanged afterwards, so a fetch
//! that straddles an invalidation can never resurrect stale data. The
//! fetched value is still returned to its caller.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use super::key::{QueryDomain, QueryKey, QueryPrefix};
use crate::error::ClientError;

type CachedValue = Arc<dyn Any + Send + Sync>;

#[derive(Default)]
struct CacheState {
    entries: HashMap<QueryKey, CachedValue>,
    generations: HashMap<QueryDomain, u64>,
}

impl CacheState {
    fn generation(&self, domain: QueryDomain) -> u64 {
        self.generations.get(&domain).copied().unwrap_or_default()
    }
}

/// Shared cache of decoded query results.
#[derive(Default)]
pub struct QueryCache {
    state: Mutex<CacheState>,
}

impl QueryCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, or run `fetch` and cache its
    /// success.
    ///
    /// Failures, including cancellation, are never cached.
    ///
    /// # Errors
    /// Propagates the error returned by `fetch`.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetch: F) -> Result<T, ClientError>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let started_at = {
            let state = self.state.lock().await;
            if let Some(value) = state
                .entries
                .get(&key)
                .and_then(|value| value.downcast_ref::<T>())
            {
                debug!(%key, "query cache hit");
                return Ok(value.clone());
            }
            state.generation(key.domain())
        };

        debug!(%key, "query cache miss");
        let value = fetch().await?;

        let mut state = self.state.lock().await;
        if state.generation(key.domain()) == started_at {
            state.entries.insert(key, Arc::new(value.clone()));
        } else {
            debug!(%key, "discarding result fetched before invalidation");
        }
        Ok(value)
    }

    /// Drop every entry under `prefix`; returns how many were removed.
    pub async fn invalidate(&self, prefix: &QueryPrefix) -> usize {
        let mut state = self.state.lock().await;
        let before = state.entries.len();
        state.entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before.saturating_sub(state.entries.len());
        let generation = state.generations.entry(prefix.query_domain()).or_default();
        *generation = generation.wrapping_add(1);
        debug!(domain = prefix.query_domain().as_str(), removed, "query cache invalidated");
        removed
    }

    /// Whether `key` currently holds a value.
    pub async fn contains(&self, key: &QueryKey) -> bool {
        self.state.lock().await.entries.contains_key(key)
    }

    /// Number of cached entries.
    pub async fn len(&self) -> usize {
        self.state.lock().await.entries.len()
    }

    /// Whether nothing is cached.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
