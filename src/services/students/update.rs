use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, students::requests::UpdateStudentRequest, students::responses::StudentResponse,
};
use crate::services::record_audit;
use crate::utils::validate::{validate_date, validate_email, validate_required};

pub async fn update_student(
    service: &StudentService,
    student_id: &str,
    update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 更新时姓名可以缺省，但不能为空串
    if let Some(ref full_name) = update_data.full_name
        && let Err(msg) = validate_required(full_name, "full_name")
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    if let Some(ref email) = update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    if let Some(ref date_of_birth) = update_data.date_of_birth
        && let Err(msg) = validate_date(date_of_birth, "date_of_birth")
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    let storage = service.get_storage(request);

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "student.update",
                    Some(student.student_id.clone()),
                    None,
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(StudentResponse { student })))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error("Student not found"))),
        Err(e) => {
            error!("Student update failed: {e}");
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("Student update failed: {e}"))))
        }
    }
}
