use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::services::record_audit;

pub async fn delete_teacher(
    service: &TeacherService,
    teacher_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_teacher(teacher_id).await {
        Ok(true) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "teacher.delete",
                    Some(teacher_id.to_string()),
                    None,
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty()))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error("Teacher not found"))),
        Err(e) => {
            error!("Teacher deletion failed: {e}");
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("Teacher deletion failed: {e}"))))
        }
    }
}
