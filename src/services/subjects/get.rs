use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::{ApiResponse, subjects::responses::SubjectResponse};

pub async fn get_subject(
    service: &SubjectService,
    subject_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_subject_by_id(subject_id).await {
        Ok(Some(subject)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(SubjectResponse { subject })))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error("Subject not found"))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::error(format!("Failed to retrieve subject: {e}")))),
    }
}
