//! In-memory cache implementation using the moka crate.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;

use cvforge_core::config::cache::MemoryCacheConfig;
use cvforge_core::result::AppResult;
use cvforge_core::traits::cache::CacheProvider;

/// A cached value together with the TTL it was stored under.
#[derive(Debug, Clone)]
struct CachedEntry {
    value: String,
    ttl: Duration,
}

/// Expires each entry after its own TTL, capped by the configured
/// cache-wide ceiling.
struct EntryTtl {
    ceiling: Duration,
}

impl Expiry<String, CachedEntry> for EntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &CachedEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl.min(self.ceiling))
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &CachedEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl.min(self.ceiling))
    }
}

/// In-memory cache provider using moka.
#[derive(Debug, Clone)]
pub struct MemoryCacheProvider {
    /// The underlying moka cache.
    cache: Cache<String, CachedEntry>,
    /// Default TTL for entries.
    default_ttl: Duration,
}

impl MemoryCacheProvider {
    /// Create a new in-memory cache from configuration.
    pub fn new(config: &MemoryCacheConfig, default_ttl_seconds: u64) -> Self {
        let expiry = EntryTtl {
            ceiling: Duration::from_secs(config.time_to_live_seconds),
        };
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(expiry)
            .build();

        Self {
            cache,
            default_ttl: Duration::from_secs(default_ttl_seconds),
        }
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.cache.get(key).await.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let entry = CachedEntry {
            value: value.to_string(),
            ttl,
        };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn set_default(&self, key: &str, value: &str) -> AppResult<()> {
        self.set(key, value, self.default_ttl).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.remove(key).await;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.cache.contains_key(key))
    }

    async fn expire(&self, key: &str, ttl: Duration) -> AppResult<bool> {
        // Re-insert so the update path picks up the new TTL.
        if let Some(entry) = self.cache.get(key).await {
            let entry = CachedEntry { ttl, ..entry };
            self.cache.insert(key.to_string(), entry).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn flush_all(&self) -> AppResult<()> {
        self.cache.invalidate_all();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvforge_core::config::cache::MemoryCacheConfig;

    fn make_provider() -> MemoryCacheProvider {
        let config = MemoryCacheConfig {
            max_capacity: 1000,
            time_to_live_seconds: 60,
        };
        MemoryCacheProvider::new(&config, 60)
    }

    #[tokio::test]
    async fn test_set_get() {
        let provider = make_provider();
        provider
            .set("key1", "value1", Duration::from_secs(60))
            .await
            .unwrap();
        let val = provider.get("key1").await.unwrap();
        assert_eq!(val, Some("value1".to_string()));
    }

    #[tokio::test]
    async fn test_delete() {
        let provider = make_provider();
        provider
            .set("key2", "value2", Duration::from_secs(60))
            .await
            .unwrap();
        provider.delete("key2").await.unwrap();
        let val = provider.get("key2").await.unwrap();
        assert_eq!(val, None);
    }

    #[tokio::test]
    async fn entries_honor_their_own_ttl() {
        let provider = make_provider();
        provider
            .set("short", "v", Duration::from_millis(50))
            .await
            .unwrap();
        provider
            .set("long", "v", Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(provider.get("short").await.unwrap(), None);
        assert_eq!(provider.get("long").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn expire_replaces_the_entry_ttl() {
        let provider = make_provider();
        provider
            .set("key", "v", Duration::from_secs(60))
            .await
            .unwrap();
        assert!(provider.expire("key", Duration::from_millis(50)).await.unwrap());

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(provider.get("key").await.unwrap(), None);
        assert!(!provider.expire("key", Duration::from_secs(1)).await.unwrap());
    }

    #[tokio::test]
    async fn test_json_roundtrip() {
        let provider = make_provider();
        let data = serde_json::json!({"name": "test", "count": 42});
        provider
            .set_json("json_key", &data, Duration::from_secs(60))
            .await
            .unwrap();
        let result: Option<serde_json::Value> = provider.get_json("json_key").await.unwrap();
        assert_eq!(result, Some(data));
    }

    #[tokio::test]
    async fn test_health_check() {
        let provider = make_provider();
        assert!(provider.health_check().await.unwrap());
    }
}
