use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, teachers::requests::UpdateTeacherRequest, teachers::responses::TeacherResponse,
};
use crate::services::record_audit;
use crate::utils::validate::{validate_email, validate_required};

pub async fn update_teacher(
    service: &TeacherService,
    teacher_id: &str,
    update_data: UpdateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
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

    let storage = service.get_storage(request);

    match storage.update_teacher(teacher_id, update_data).await {
        Ok(Some(teacher)) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "teacher.update",
                    Some(teacher.teacher_id.clone()),
                    None,
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(TeacherResponse { teacher })))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error("Teacher not found"))),
        Err(e) => {
            error!("Teacher update failed: {e}");
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("Teacher update failed: {e}"))))
        }
    }
}
