use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, students::requests::CreateStudentRequest, students::responses::StudentResponse,
};
use crate::services::record_audit;
use crate::utils::validate::{validate_date, validate_email, validate_required};

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 姓名必填
    if let Err(msg) = validate_required(&student_data.full_name, "full_name") {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    if let Some(ref email) = student_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    if let Some(ref date_of_birth) = student_data.date_of_birth
        && let Err(msg) = validate_date(date_of_birth, "date_of_birth")
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_student(student_data).await {
        Ok(student) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "student.create",
                    Some(student.student_id.clone()),
                    Some(format!("full_name={}", student.full_name)),
                );
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(StudentResponse { student })))
        }
        Err(e) => {
            error!("Student creation failed: {e}");
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("Student creation failed: {e}"))))
        }
    }
}
