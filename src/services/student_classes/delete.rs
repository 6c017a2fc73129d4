use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentClassService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::services::record_audit;

pub async fn delete_enrollment(
    service: &StudentClassService,
    id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_student_class(id).await {
        Ok(true) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "student_class.delete",
                    Some(id.to_string()),
                    None,
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty()))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error("Enrollment not found"))),
        Err(e) => {
            error!("Enrollment deletion failed: {e}");
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("Enrollment deletion failed: {e}"))))
        }
    }
}
