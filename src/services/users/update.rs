use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, users::requests::UpdateUserRequest, users::responses::UserResponse};
use crate::services::{is_unique_violation, record_audit};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple};

pub async fn update_user(
    service: &UserService,
    user_id: &str,
    mut update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref email) = update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    // 更新密码时同样要求强度并哈希
    if let Some(ref password) = update_data.password {
        if let Err(msg) = validate_password_simple(password) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
        }
        update_data.password = match hash_password(password) {
            Ok(hash) => Some(hash),
            Err(e) => {
                error!("Password hashing failed: {e}");
                return Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error("Password hashing failed")));
            }
        };
    }

    let storage = service.get_storage(request);

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "user.update",
                    Some(user.user_id.clone()),
                    None,
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse { user })))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error("User not found"))),
        Err(e) => {
            let msg = format!("User update failed: {e}");
            error!("{}", msg);
            if is_unique_violation(&msg) {
                Ok(HttpResponse::Conflict().json(ApiResponse::error("Email already exists")))
            } else {
                Ok(HttpResponse::InternalServerError().json(ApiResponse::error(msg)))
            }
        }
    }
}
