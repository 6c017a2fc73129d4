pub mod create;
pub mod delete;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::class_subjects::requests::{ClassSubjectListParams, CreateClassSubjectRequest};
use crate::storage::Storage;

pub struct ClassSubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassSubjectService {
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

    // 获取排课记录列表
    pub async fn list_assignments(
        &self,
        query: ClassSubjectListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments(self, query, request).await
    }

    // 创建排课记录
    pub async fn create_assignment(
        &self,
        assignment_data: CreateClassSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, assignment_data, request).await
    }

    // 根据ID获取排课记录
    pub async fn get_assignment(
        &self,
        id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_assignment(self, id, request).await
    }

    // 删除排课记录
    pub async fn delete_assignment(
        &self,
        id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assignment(self, id, request).await
    }
}
