use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{ApiResponse, users::responses::UserResponse};

pub async fn get_user(
    service: &UserService,
    user_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse { user }))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error("User not found"))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::error(format!("Failed to retrieve user: {e}")))),
    }
}
