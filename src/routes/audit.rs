use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::audit::requests::AuditLogListParams;
use crate::models::users::entities::UserRole;
use crate::services::AuditService;

// 懒加载的全局 AuditService 实例
static AUDIT_SERVICE: Lazy<AuditService> = Lazy::new(AuditService::new_lazy);

pub async fn list_audit_logs(
    req: HttpRequest,
    query: web::Query<AuditLogListParams>,
) -> ActixResult<HttpResponse> {
    AUDIT_SERVICE.list_audit_logs(query.into_inner(), &req).await
}

// 配置路由：审计日志仅限管理员查看
pub fn configure_audit_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/audit-logs")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::get().to(list_audit_logs)),
            ),
    );
}
