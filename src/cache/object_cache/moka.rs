//! 进程内缓存后端（Moka）
//!
//! 默认缓存后端，无外部依赖。容量与 TTL 在创建时由配置决定，
//! 之后对单条写入传入的 TTL 不再生效。

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("moka", MokaObjectCache);

pub struct MokaObjectCache {
    entries: Cache<String, String>,
}

impl MokaObjectCache {
    pub fn new() -> Result<Self, String> {
        let cache_config = &AppConfig::get().cache;
        let entries = Cache::builder()
            .max_capacity(cache_config.memory.max_capacity)
            .time_to_live(std::time::Duration::from_secs(cache_config.default_ttl))
            .build();

        debug!(
            "Moka cache ready (capacity: {}, ttl: {}s)",
            cache_config.memory.max_capacity, cache_config.default_ttl
        );
        Ok(Self { entries })
    }
}

impl Default for MokaObjectCache {
    fn default() -> Self {
        Self::new().expect("Moka 缓存初始化失败")
    }
}

#[async_trait]
impl ObjectCache for MokaObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        match self.entries.get(key).await {
            Some(value) => CacheResult::Found(value),
            None => CacheResult::NotFound,
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        // 全局 TTL 策略在构建时固定，单条 TTL 只做提示
        if ttl != 0 {
            debug!("Per-entry TTL ignored by Moka backend (key: {})", key);
        }
        self.entries.insert(key, value).await;
    }

    async fn remove(&self, key: &str) {
        self.entries.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_get_remove_roundtrip() {
        let cache = MokaObjectCache::new().unwrap();

        cache
            .insert_raw("k1".to_string(), "v1".to_string(), 0)
            .await;
        assert_eq!(
            cache.get_raw("k1").await,
            CacheResult::Found("v1".to_string())
        );

        cache.remove("k1").await;
        assert_eq!(cache.get_raw("k1").await, CacheResult::NotFound);
    }

    #[tokio::test]
    async fn invalidate_all_clears_entries() {
        let cache = MokaObjectCache::new().unwrap();
        cache.insert_raw("a".to_string(), "1".to_string(), 0).await;
        cache.insert_raw("b".to_string(), "2".to_string(), 0).await;

        cache.invalidate_all().await;
        // invalidate_all 异步生效，逐出前 get 会触发同步检查
        cache.entries.run_pending_tasks().await;
        assert_eq!(cache.get_raw("a").await, CacheResult::NotFound);
        assert_eq!(cache.get_raw("b").await, CacheResult::NotFound);
    }
}
