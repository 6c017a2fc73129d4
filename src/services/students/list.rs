use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse,
    students::requests::{StudentListParams, StudentListQuery},
};

pub async fn list_students(
    service: &StudentService,
    query: StudentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = StudentListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.page_size),
        search: query.search,
        include_inactive: query.include_inactive,
    };

    match storage.list_students_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error(format!(
            "Failed to retrieve student list: {e}"
        )))),
    }
}
