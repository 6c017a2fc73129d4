use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentClassService;
use crate::models::{ApiResponse, student_classes::responses::StudentClassResponse};

pub async fn get_enrollment(
    service: &StudentClassService,
    id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_class_by_id(id).await {
        Ok(Some(enrollment)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(StudentClassResponse { enrollment })))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error("Enrollment not found"))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error(format!(
            "Failed to retrieve enrollment: {e}"
        )))),
    }
}
