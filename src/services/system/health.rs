use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SystemService;
use crate::models::{ApiResponse, AppStartTime, system::responses::HealthResponse};

// 健康检查不要求认证，供负载均衡与运维探活
pub async fn handle_health(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();
    let storage = service.get_storage(request);

    let uptime_seconds = request
        .app_data::<actix_web::web::Data<AppStartTime>>()
        .map(|start| {
            chrono::Utc::now()
                .signed_duration_since(start.start_datetime)
                .num_seconds()
        })
        .unwrap_or(0);

    // 探测存储后端连通性
    let database = match storage.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!("Health check storage ping failed: {e}");
            "error"
        }
    };

    let response = HealthResponse {
        status: if database == "ok" { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        uptime_seconds,
        storage_type: storage.backend_name().to_string(),
        database: database.to_string(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
