use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, classes::requests::UpdateClassRequest, classes::responses::ClassResponse,
};
use crate::services::record_audit;
use crate::utils::validate::validate_required;

pub async fn update_class(
    service: &ClassService,
    class_id: &str,
    update_data: UpdateClassRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref name) = update_data.name
        && let Err(msg) = validate_required(name, "name")
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(msg)));
    }

    let storage = service.get_storage(request);

    match storage.update_class(class_id, update_data).await {
        Ok(Some(class)) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "class.update",
                    Some(class.class_id.clone()),
                    None,
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(ClassResponse { class })))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error("Class not found"))),
        Err(e) => {
            error!("Class update failed: {e}");
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("Class update failed: {e}"))))
        }
    }
}
