use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::SystemService;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "服务健康状态")
    ),
    tag = "system"
)]
pub async fn health(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.health(&request).await
}

// 配置路由：健康检查无需认证
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test, web};

    use super::*;
    use crate::storage::Storage;
    use crate::test_utils;

    #[actix_web::test]
    async fn health_is_public_and_reports_fixture_backend() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .app_data(web::Data::new(test_utils::app_start_time()))
                .configure(configure_system_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["status"], "ok");
        assert_eq!(body["data"]["database"], "ok");
        assert_eq!(body["data"]["storage_type"], "fixture");
        assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
    }
}
