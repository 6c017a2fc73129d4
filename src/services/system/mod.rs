pub mod health;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::Storage;

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
            .expect("Storage not found in app data")
            .get_ref()
            .clone()
    }

    // 健康检查
    pub async fn health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        health::handle_health(self, request).await
    }
}
