use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::services::record_audit;

pub async fn delete_student(
    service: &StudentService,
    student_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_student(student_id).await {
        Ok(true) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "student.delete",
                    Some(student_id.to_string()),
                    None,
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty()))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error("Student not found"))),
        Err(e) => {
            error!("Student deletion failed: {e}");
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("Student deletion failed: {e}"))))
        }
    }
}
