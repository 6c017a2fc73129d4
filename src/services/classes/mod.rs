pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::requests::{ClassListParams, CreateClassRequest, UpdateClassRequest};
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取班级列表
    pub async fn list_classes(
        &self,
        query: ClassListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_classes(self, query, request).await
    }

    // 创建班级
    pub async fn create_class(
        &self,
        class_data: CreateClassRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, class_data, request).await
    }

    // 根据ID获取班级
    pub async fn get_class(
        &self,
        class_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_class(self, class_id, request).await
    }

    // 更新班级信息
    pub async fn update_class(
        &self,
        class_id: &str,
        update_data: UpdateClassRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class(self, class_id, update_data, request).await
    }

    // 硬删除班级（级联删除选课/排课记录）
    pub async fn delete_class(
        &self,
        class_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_class(self, class_id, request).await
    }
}
