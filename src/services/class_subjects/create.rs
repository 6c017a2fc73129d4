use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassSubjectService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, class_subjects::requests::CreateClassSubjectRequest,
    class_subjects::responses::ClassSubjectResponse,
};
use crate::services::{is_foreign_key_violation, is_unique_violation, record_audit};
use crate::utils::validate::validate_required;

pub async fn create_assignment(
    service: &ClassSubjectService,
    assignment_data: CreateClassSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_required(&assignment_data.class_id, "class_id") {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }
    if let Err(msg) = validate_required(&assignment_data.subject_id, "subject_id") {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_class_subject(assignment_data).await {
        Ok(assignment) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "class_subject.create",
                    Some(assignment.id.clone()),
                    Some(format!(
                        "class_id={} subject_id={}",
                        assignment.class_id, assignment.subject_id
                    )),
                );
            }
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(ClassSubjectResponse { assignment })))
        }
        Err(e) => {
            let msg = format!("Assignment creation failed: {e}");
            error!("{}", msg);
            if is_unique_violation(&msg) {
                Ok(HttpResponse::Conflict()
                    .json(ApiResponse::error("Subject is already assigned to this class")))
            } else if is_foreign_key_violation(&msg) {
                Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error("Class or subject does not exist")))
            } else {
                Ok(HttpResponse::InternalServerError().json(ApiResponse::error(msg)))
            }
        }
    }
}
