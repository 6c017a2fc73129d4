use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::services::record_audit;

pub async fn delete_user(
    service: &UserService,
    user_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 禁止删除当前登录用户
    if let Some(current_user) = RequireJWT::extract_user_claims(request)
        && current_user.user_id == user_id
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error("Cannot delete current user")));
    }

    match storage.delete_user(user_id).await {
        Ok(true) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "user.delete",
                    Some(user_id.to_string()),
                    None,
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty()))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error("User not found"))),
        Err(e) => {
            error!("User deletion failed: {e}");
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("User deletion failed: {e}"))))
        }
    }
}
