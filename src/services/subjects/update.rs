use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, subjects::requests::UpdateSubjectRequest, subjects::responses::SubjectResponse,
};
use crate::services::record_audit;
use crate::utils::validate::validate_required;

pub async fn update_subject(
    service: &SubjectService,
    subject_id: &str,
    update_data: UpdateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref name) = update_data.name
        && let Err(msg) = validate_required(name, "name")
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    let storage = service.get_storage(request);

    match storage.update_subject(subject_id, update_data).await {
        Ok(Some(subject)) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "subject.update",
                    Some(subject.subject_id.clone()),
                    None,
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(SubjectResponse { subject })))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error("Subject not found"))),
        Err(e) => {
            error!("Subject update failed: {e}");
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("Subject update failed: {e}"))))
        }
    }
}
