use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassSubjectService;
use crate::models::{
    ApiResponse,
    class_subjects::requests::{ClassSubjectListParams, ClassSubjectListQuery},
};

pub async fn list_assignments(
    service: &ClassSubjectService,
    query: ClassSubjectListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = ClassSubjectListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.page_size),
        class_id: query.class_id,
        subject_id: query.subject_id,
    };

    match storage.list_class_subjects_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error(format!(
            "Failed to retrieve assignment list: {e}"
        )))),
    }
}
