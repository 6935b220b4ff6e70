//! Timed caching for fetched market data

use cached::{Cached, TimedCache};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Thread-safe, symbol-keyed cache with a fixed TTL
///
/// Typed per payload rather than stringly JSON: one cache instance holds
/// one kind of record (e.g. a full market bundle).
pub struct DataCache<V: Clone> {
    cache: Arc<RwLock<TimedCache<String, V>>>,
}

impl<V: Clone> DataCache<V> {
    /// Create a new cache with the given TTL
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(TimedCache::with_lifespan(ttl))),
        }
    }

    /// Get a cached value for a symbol
    pub async fn get(&self, symbol: &str) -> Option<V> {
        let mut cache = self.cache.write().await;
        cache.cache_get(&symbol.to_string()).cloned()
    }

    /// Insert a value for a symbol
    pub async fn insert(&self, symbol: impl Into<String>, value: V) {
        let mut cache = self.cache.write().await;
        let _ = cache.cache_set(symbol.into(), value);
    }

    /// Remove every cached entry
    pub async fn clear(&self) {
        let mut cache = self.cache.write().await;
        cache.cache_clear();
    }

    /// Number of live entries
    pub async fn len(&self) -> usize {
        let cache = self.cache.read().await;
        cache.cache_size()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<V: Clone> Clone for DataCache<V> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache = DataCache::new(Duration::from_secs(60));
        cache.insert("AAPL", 42_u32).await;

        assert_eq!(cache.get("AAPL").await, Some(42));
        assert_eq!(cache.get("MSFT").await, None);
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = DataCache::new(Duration::from_secs(60));
        cache.insert("AAPL", 1_u32).await;
        cache.insert("MSFT", 2_u32).await;
        assert_eq!(cache.len().await, 2);

        cache.clear().await;
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_clone_shares_storage() {
        let cache = DataCache::new(Duration::from_secs(60));
        let clone = cache.clone();
        cache.insert("AAPL", 7_u32).await;
        assert_eq!(clone.get("AAPL").await, Some(7));
    }
}
