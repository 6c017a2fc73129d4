/*!
 * JWT 认证中间件
 *
 * 验证 `Authorization: Bearer <JWT>` 请求头，确保只有通过身份验证的
 * 用户才能访问受保护的路由。
 *
 * ## 认证流程
 *
 * 1. 客户端在请求头中包含 `Authorization: Bearer <JWT_TOKEN>`
 * 2. 缺失或格式错误的请求头返回 401
 * 3. 签名无效或已过期的令牌返回 403（fail closed）
 * 4. 令牌有效时按 token→用户 缓存加载用户记录，未命中回源存储层
 * 5. 用户记录写入请求扩展，供后续处理程序和 RequireRole 使用
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * web::scope("/api/v1/students")
 *     .wrap(RequireJWT)
 *     .route("", web::get().to(list_students))
 * ```
 *
 * 处理程序中通过 `RequireJWT::extract_user_claims(&req)` 取当前用户。
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::models::users::entities::{User, UserRole};
use crate::storage::Storage;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

/// 认证失败的两种结局：缺失凭据（401）与无效凭据（403）
enum AuthFailure {
    Missing(String),
    Invalid(String),
}

// 辅助函数：提取并验证 JWT access token，返回完整用户记录
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<User, AuthFailure> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| {
            AuthFailure::Missing("Missing or invalid Authorization header".to_string())
        })?;

    let claims = crate::utils::jwt::JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        AuthFailure::Invalid("Invalid or expired token".to_string())
    })?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();

    // 从缓存中获取用户信息
    let cache_key = format!("user:{token}");
    match cache.get_raw(&cache_key).await {
        CacheResult::Found(json) => match serde_json::from_str::<User>(&json) {
            Ok(user) => return Ok(user),
            Err(_) => {
                cache.remove(&cache_key).await;
                info!("Failed to deserialize cached user for token, falling back to storage");
            }
        },
        _ => {
            debug!("User not found in cache for token");
        }
    };

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let user = storage
        .get_user_by_username(&claims.sub)
        .await
        .map_err(|_| AuthFailure::Invalid("Failed to retrieve user from storage".to_string()))?
        .ok_or_else(|| AuthFailure::Invalid("User not found".to_string()))?;

    if !user.active {
        return Err(AuthFailure::Invalid("User is not active".to_string()));
    }

    // 将用户信息存入缓存，TTL 与令牌寿命无关，由缓存配置决定
    let app_config = AppConfig::get();
    if let Ok(user_json) = serde_json::to_string(&user) {
        cache
            .insert_raw(cache_key, user_json, app_config.cache.default_ttl)
            .await;
    }

    Ok(user)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // CORS 预检请求直接放行
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            match extract_and_validate_jwt(&req).await {
                Ok(user) => {
                    debug!("JWT authentication successful for user: {}", user.username);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(failure) => {
                    let (status, err) = match failure {
                        AuthFailure::Missing(msg) => (StatusCode::UNAUTHORIZED, msg),
                        AuthFailure::Invalid(msg) => (StatusCode::FORBIDDEN, msg),
                    };
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(status, &err).map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取用户信息
impl RequireJWT {
    /// 从请求扩展中提取完整用户记录
    /// 此函数应该在应用了 RequireJWT 中间件的路由处理程序中使用
    pub fn extract_user_claims(req: &actix_web::HttpRequest) -> Option<User> {
        req.extensions().get::<User>().cloned()
    }

    /// 从请求扩展中提取用户名
    pub fn extract_username(req: &actix_web::HttpRequest) -> Option<String> {
        req.extensions()
            .get::<User>()
            .map(|user| user.username.clone())
    }

    /// 从请求扩展中提取用户角色
    pub fn extract_user_role(req: &actix_web::HttpRequest) -> Option<UserRole> {
        req.extensions().get::<User>().map(|user| user.role.clone())
    }
}
