use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, students::responses::StudentResponse};

pub async fn get_student(
    service: &StudentService,
    student_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(StudentResponse { student })))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error("Student not found"))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::error(format!("Failed to retrieve student: {e}")))),
    }
}
