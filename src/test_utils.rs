//! 测试辅助工具
//!
//! HTTP 层测试统一使用 fixture 存储 + 内存缓存搭建应用，
//! 这里提供存储/缓存构造与测试账号签发令牌的辅助函数。

use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::cache::object_cache::moka::MokaObjectCache;
use crate::models::AppStartTime;
use crate::models::users::entities::{User, UserRole};
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::storage::fixture_storage::FixtureStorage;
use crate::utils::password::hash_password;

/// 测试账号的统一明文密码
pub const TEST_PASSWORD: &str = "Test@Password123";

/// 创建预装固定数据的内存存储
pub fn fixture_storage() -> Arc<dyn Storage> {
    Arc::new(FixtureStorage::new())
}

/// 创建内存缓存实例
pub fn memory_cache() -> Arc<dyn ObjectCache> {
    Arc::new(MokaObjectCache::new().expect("内存缓存初始化失败"))
}

pub fn app_start_time() -> AppStartTime {
    AppStartTime {
        start_datetime: chrono::Utc::now(),
    }
}

/// 创建一个密码为 [`TEST_PASSWORD`] 的测试用户
pub async fn seed_user(storage: &Arc<dyn Storage>, username: &str, role: UserRole) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("密码哈希失败");
    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@test.localhost"),
            password: password_hash,
            role,
            full_name: Some(format!("Test {username}")),
        })
        .await
        .expect("创建测试用户失败")
}

/// 为测试用户签发访问令牌
pub async fn seed_user_token(
    storage: &Arc<dyn Storage>,
    username: &str,
    role: UserRole,
) -> String {
    let user = seed_user(storage, username, role).await;
    user.generate_access_token().expect("签发测试令牌失败")
}
