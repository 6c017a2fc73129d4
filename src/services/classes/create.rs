use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, classes::requests::CreateClassRequest, classes::responses::ClassResponse,
};
use crate::services::record_audit;
use crate::utils::validate::validate_required;

pub async fn create_class(
    service: &ClassService,
    class_data: CreateClassRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 名称必填
    if let Err(msg) = validate_required(&class_data.name, "name") {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_class(class_data).await {
        Ok(class) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "class.create",
                    Some(class.class_id.clone()),
                    Some(format!("name={}", class.name)),
                );
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(ClassResponse { class })))
        }
        Err(e) => {
            error!("Class creation failed: {e}");
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("Class creation failed: {e}"))))
        }
    }
}
