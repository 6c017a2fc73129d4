use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::{
    ApiResponse,
    subjects::requests::{SubjectListParams, SubjectListQuery},
};

pub async fn list_subjects(
    service: &SubjectService,
    query: SubjectListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = SubjectListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.page_size),
        search: query.search,
    };

    match storage.list_subjects_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error(format!(
            "Failed to retrieve subject list: {e}"
        )))),
    }
}
