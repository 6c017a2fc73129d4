use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentClassService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, student_classes::requests::CreateStudentClassRequest,
    student_classes::responses::StudentClassResponse,
};
use crate::services::{is_foreign_key_violation, is_unique_violation, record_audit};
use crate::utils::validate::validate_required;

pub async fn create_enrollment(
    service: &StudentClassService,
    enrollment_data: CreateStudentClassRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_required(&enrollment_data.student_id, "student_id") {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }
    if let Err(msg) = validate_required(&enrollment_data.class_id, "class_id") {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_student_class(enrollment_data).await {
        Ok(enrollment) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "student_class.create",
                    Some(enrollment.id.clone()),
                    Some(format!(
                        "student_id={} class_id={}",
                        enrollment.student_id, enrollment.class_id
                    )),
                );
            }
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(StudentClassResponse { enrollment })))
        }
        Err(e) => {
            let msg = format!("Enrollment creation failed: {e}");
            error!("{}", msg);
            if is_unique_violation(&msg) {
                Ok(HttpResponse::Conflict()
                    .json(ApiResponse::error("Student is already enrolled in this class")))
            } else if is_foreign_key_violation(&msg) {
                Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error("Student or class does not exist")))
            } else {
                Ok(HttpResponse::InternalServerError().json(ApiResponse::error(msg)))
            }
        }
    }
}
