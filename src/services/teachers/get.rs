use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, teachers::responses::TeacherResponse};

pub async fn get_teacher(
    service: &TeacherService,
    teacher_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(teacher)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(TeacherResponse { teacher })))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error("Teacher not found"))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::error(format!("Failed to retrieve teacher: {e}")))),
    }
}
