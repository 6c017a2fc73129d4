use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentClassService;
use crate::models::{
    ApiResponse,
    student_classes::requests::{StudentClassListParams, StudentClassListQuery},
};

pub async fn list_enrollments(
    service: &StudentClassService,
    query: StudentClassListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = StudentClassListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.page_size),
        student_id: query.student_id,
        class_id: query.class_id,
    };

    match storage.list_student_classes_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error(format!(
            "Failed to retrieve enrollment list: {e}"
        )))),
    }
}
