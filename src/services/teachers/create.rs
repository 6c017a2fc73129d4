use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, teachers::requests::CreateTeacherRequest, teachers::responses::TeacherResponse,
};
use crate::services::record_audit;
use crate::utils::validate::{validate_email, validate_required};

pub async fn create_teacher(
    service: &TeacherService,
    teacher_data: CreateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 姓名必填
    if let Err(msg) = validate_required(&teacher_data.full_name, "full_name") {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    if let Some(ref email) = teacher_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_teacher(teacher_data).await {
        Ok(teacher) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "teacher.create",
                    Some(teacher.teacher_id.clone()),
                    Some(format!("full_name={}", teacher.full_name)),
                );
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(TeacherResponse { teacher })))
        }
        Err(e) => {
            error!("Teacher creation failed: {e}");
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("Teacher creation failed: {e}"))))
        }
    }
}
