use serde::Deserialize;
use ts_rs::TS;
use utoipa::ToSchema;

// 用户登录请求（来自HTTP请求）
#[derive(Debug, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    /// 用户名或邮箱
    pub username: String,
    /// 密码
    pub password: String,
}
