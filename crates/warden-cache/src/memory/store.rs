//! In-memory cache implementation using the moka crate.
//!
//! Per-entry TTL matters here: revocation entries must expire exactly
//! when the token they revoke does, so the cache honors the TTL passed
//! with each value via moka's `Expiry` policy.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;

use warden_core::config::cache::MemoryCacheConfig;
use warden_core::result::AppResult;
use warden_core::traits::cache::CacheProvider;

/// A cached value bundled with its own time-to-live.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Expiry policy that reads the TTL stored alongside each entry.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// In-memory cache provider using moka.
#[derive(Clone)]
pub struct MemoryCacheProvider {
    /// The underlying moka cache.
    cache: Cache<String, Entry>,
    /// Counters stored separately with their window deadline.
    counters: Arc<dashmap::DashMap<String, (i64, Instant)>>,
}

impl std::fmt::Debug for MemoryCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheProvider")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl MemoryCacheProvider {
    /// Create a new in-memory cache from configuration.
    pub fn new(config: &MemoryCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self {
            cache,
            counters: Arc::new(dashmap::DashMap::new()),
        }
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.cache.get(key).await.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.cache
            .insert(
                key.to_string(),
                Entry {
                    value: value.to_string(),
                    ttl,
                },
            )
            .await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.remove(key).await;
        self.counters.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.cache.get(key).await.is_some())
    }

    async fn set_nx(&self, key: &str, value: &str, ttl: Duration) -> AppResult<bool> {
        let entry = self
            .cache
            .entry(key.to_string())
            .or_insert(Entry {
                value: value.to_string(),
                ttl,
            })
            .await;
        Ok(entry.is_fresh())
    }

    async fn incr(&self, key: &str, ttl: Duration) -> AppResult<i64> {
        let now = Instant::now();
        let mut slot = self
            .counters
            .entry(key.to_string())
            .or_insert((0, now + ttl));
        // Expired window: restart the counter.
        if slot.1 <= now {
            *slot = (0, now + ttl);
        }
        slot.0 += 1;
        Ok(slot.0)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn flush_all(&self) -> AppResult<()> {
        self.cache.invalidate_all();
        self.counters.clear();
        Ok(())
    }
}
