//! 认证授权中间件
//!
//! - `RequireJWT`: 验证 Bearer 令牌并把完整用户记录挂到请求扩展
//! - `RequireRole`: 静态角色白名单校验，必须在 RequireJWT 之后使用
//! - `RateLimit`: 固定窗口限流，保护登录等敏感端点

pub mod rate_limit;
pub mod require_jwt;
pub mod require_role;

pub use rate_limit::RateLimit;
pub use require_jwt::RequireJWT;
pub use require_role::RequireRole;

use actix_web::{HttpResponse, http::StatusCode, http::header::CONTENT_TYPE};

use crate::models::ApiResponse;

// 辅助函数：创建信封格式的错误响应
pub(crate) fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(ApiResponse::error(message)),
    }
}
