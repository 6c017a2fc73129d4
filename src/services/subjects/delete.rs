use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::services::record_audit;

pub async fn delete_subject(
    service: &SubjectService,
    subject_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_subject(subject_id).await {
        Ok(true) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "subject.delete",
                    Some(subject_id.to_string()),
                    None,
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty()))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error("Subject not found"))),
        Err(e) => {
            error!("Subject deletion failed: {e}");
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("Subject deletion failed: {e}"))))
        }
    }
}
