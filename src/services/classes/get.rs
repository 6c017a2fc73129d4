use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::{ApiResponse, classes::responses::ClassResponse};

pub async fn get_class(
    service: &ClassService,
    class_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(ClassResponse { class })))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error("Class not found"))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::error(format!("Failed to retrieve class: {e}")))),
    }
}
