use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{
    ApiResponse,
    teachers::requests::{TeacherListParams, TeacherListQuery},
};

pub async fn list_teachers(
    service: &TeacherService,
    query: TeacherListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = TeacherListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.page_size),
        search: query.search,
        include_inactive: query.include_inactive,
    };

    match storage.list_teachers_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error(format!(
            "Failed to retrieve teacher list: {e}"
        )))),
    }
}
