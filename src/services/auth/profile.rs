use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, auth::responses::UserInfoResponse};

// 用户已由 JWT 中间件验证并注入请求扩展
pub async fn handle_profile(request: &HttpRequest) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(UserInfoResponse { user }))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error("Authentication required"))),
    }
}
