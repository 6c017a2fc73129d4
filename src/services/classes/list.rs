use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::{
    ApiResponse,
    classes::requests::{ClassListParams, ClassListQuery},
};

pub async fn list_classes(
    service: &ClassService,
    query: ClassListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = ClassListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.page_size),
        search: query.search,
        grade_level: query.grade_level,
    };

    match storage.list_classes_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::error(format!("Failed to retrieve class list: {e}")))),
    }
}
