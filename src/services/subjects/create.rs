use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, subjects::requests::CreateSubjectRequest, subjects::responses::SubjectResponse,
};
use crate::services::record_audit;
use crate::utils::validate::validate_required;

pub async fn create_subject(
    service: &SubjectService,
    subject_data: CreateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 名称必填
    if let Err(msg) = validate_required(&subject_data.name, "name") {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_subject(subject_data).await {
        Ok(subject) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "subject.create",
                    Some(subject.subject_id.clone()),
                    Some(format!("name={}", subject.name)),
                );
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(SubjectResponse { subject })))
        }
        Err(e) => {
            error!("Subject creation failed: {e}");
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("Subject creation failed: {e}"))))
        }
    }
}
