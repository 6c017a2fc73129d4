//! Redis 缓存后端
//!
//! 多实例部署时共享缓存用。连接在构造时做一次 PING 探活，
//! 探活失败返回错误交由回退链降级到内存缓存。
//! 运行期的单次读写失败只记日志，不向上传播。

use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("redis", RedisObjectCache);

pub struct RedisObjectCache {
    client: redis::Client,
    key_prefix: String,
    default_ttl: u64,
}

impl RedisObjectCache {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let redis_config = &config.cache.redis;

        let client = redis::Client::open(redis_config.url.clone())
            .map_err(|e| format!("Invalid Redis URL '{}': {e}", redis_config.url))?;

        // 启动时探活，失败立即进入回退链
        let mut conn = client
            .get_connection()
            .map_err(|e| format!("Redis connection failed: {e}"))?;
        redis::cmd("PING")
            .query::<String>(&mut conn)
            .map_err(|e| format!("Redis ping failed: {e}"))?;

        debug!(
            "Redis cache ready (prefix: '{}', ttl: {}s)",
            redis_config.key_prefix, config.cache.default_ttl
        );

        Ok(Self {
            client,
            key_prefix: redis_config.key_prefix.clone(),
            default_ttl: config.cache.default_ttl,
        })
    }

    async fn connection(&self) -> Result<MultiplexedConnection, redis::RedisError> {
        self.client.get_multiplexed_async_connection().await
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let mut conn = match self.connection().await {
            Ok(conn) => conn,
            Err(e) => {
                error!("Redis connection unavailable: {e}");
                return CacheResult::ExistsButNoValue;
            }
        };

        match conn.get::<_, Option<String>>(self.prefixed(key)).await {
            Ok(Some(value)) => CacheResult::Found(value),
            Ok(None) => CacheResult::NotFound,
            Err(e) => {
                error!("Redis GET failed for key '{key}': {e}");
                CacheResult::ExistsButNoValue
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let mut conn = match self.connection().await {
            Ok(conn) => conn,
            Err(e) => {
                error!("Redis connection unavailable: {e}");
                return;
            }
        };

        let ttl = if ttl == 0 { self.default_ttl } else { ttl };
        if let Err(e) = conn
            .set_ex::<_, _, ()>(self.prefixed(&key), value, ttl)
            .await
        {
            error!("Redis SETEX failed for key '{key}': {e}");
        }
    }

    async fn remove(&self, key: &str) {
        let mut conn = match self.connection().await {
            Ok(conn) => conn,
            Err(e) => {
                error!("Redis connection unavailable: {e}");
                return;
            }
        };

        match conn.del::<_, i64>(self.prefixed(key)).await {
            Ok(removed) => {
                debug!("Redis DEL '{key}' removed {removed} key(s)");
            }
            Err(e) => {
                error!("Redis DEL failed for key '{key}': {e}");
            }
        }
    }

    async fn invalidate_all(&self) {
        // 按前缀批量失效需要 SCAN+DEL，目前没有调用方需要它
        warn!("invalidate_all is not supported by the Redis backend");
    }
}
