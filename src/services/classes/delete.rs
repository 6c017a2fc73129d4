use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::services::record_audit;

pub async fn delete_class(
    service: &ClassService,
    class_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_class(class_id).await {
        Ok(true) => {
            if let Some(actor) = RequireJWT::extract_username(request) {
                record_audit(
                    storage,
                    actor,
                    "class.delete",
                    Some(class_id.to_string()),
                    None,
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty()))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error("Class not found"))),
        Err(e) => {
            error!("Class deletion failed: {e}");
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("Class deletion failed: {e}"))))
        }
    }
}
