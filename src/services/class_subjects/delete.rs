use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassSubjectService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::services::record_audit;

pub async fn delete_assignment(
    service: &ClassSubjectService,
    id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_class_subject(id).await {
        Ok(true) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "class_subject.delete",
                    Some(id.to_string()),
                    None,
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty()))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error("Assignment not found"))),
        Err(e) => {
            error!("Assignment deletion failed: {e}");
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("Assignment deletion failed: {e}"))))
        }
    }
}
