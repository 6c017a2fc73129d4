use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, users::requests::CreateUserRequest, users::responses::UserResponse};
use crate::services::{is_unique_violation, record_audit};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

pub async fn create_user(
    service: &UserService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 验证用户名
    if let Err(msg) = validate_username(&user_data.username) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    // 验证邮箱
    if let Err(msg) = validate_email(&user_data.email) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    // 验证密码强度
    if let Err(msg) = validate_password_simple(&user_data.password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    // 入库前哈希密码
    user_data.password = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {e}");
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error("Password hashing failed")));
        }
    };

    let storage = service.get_storage(request);

    match storage.create_user(user_data).await {
        Ok(user) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "user.create",
                    Some(user.user_id.clone()),
                    Some(format!("username={}", user.username)),
                );
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(UserResponse { user })))
        }
        Err(e) => {
            let msg = format!("User creation failed: {e}");
            error!("{}", msg);
            if is_unique_violation(&msg) {
                Ok(HttpResponse::Conflict()
                    .json(ApiResponse::error("Username or email already exists")))
            } else {
                Ok(HttpResponse::InternalServerError().json(ApiResponse::error(msg)))
            }
        }
    }
}
