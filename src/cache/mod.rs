//! 对象缓存层
//!
//! 提供统一的 `ObjectCache` trait，后端通过 `declare_object_cache_plugin!`
//! 宏在启动前注册到插件表，运行时按配置选择并支持回退。

pub mod object_cache;
pub mod register;

use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    /// 命中
    Found(T),
    /// 未命中
    NotFound,
    /// 键存在但取值失败（如后端连接异常）
    ExistsButNoValue,
}

/// 对象缓存统一接口
///
/// 值以 JSON 字符串形式存取，由调用方负责序列化。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 声明并注册一个缓存后端插件
///
/// 在模块加载时（`ctor`）把构造函数写入注册表，
/// 构造失败以 `CacheConnection` 错误返回给回退链处理。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ty) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$ty>::new()
                            .map_err($crate::errors::SchoolSystemError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                }),
            );
        }
    };
}
