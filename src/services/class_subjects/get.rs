use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassSubjectService;
use crate::models::{ApiResponse, class_subjects::responses::ClassSubjectResponse};

pub async fn get_assignment(
    service: &ClassSubjectService,
    id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_class_subject_by_id(id).await {
        Ok(Some(assignment)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(ClassSubjectResponse { assignment })))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error("Assignment not found"))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error(format!(
            "Failed to retrieve assignment: {e}"
        )))),
    }
}
