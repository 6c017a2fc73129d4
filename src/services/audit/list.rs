use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuditService;
use crate::models::{
    ApiResponse,
    audit::requests::{AuditLogListParams, AuditLogListQuery},
};

pub async fn list_audit_logs(
    service: &AuditService,
    query: AuditLogListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = AuditLogListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.page_size),
        actor: query.actor,
        action: query.action,
    };

    match storage.list_audit_logs_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error(format!(
            "Failed to retrieve audit logs: {e}"
        )))),
    }
}
