pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::subjects::requests::{
    CreateSubjectRequest, SubjectListParams, UpdateSubjectRequest,
};
use crate::storage::Storage;

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
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

    // 获取科目列表
    pub async fn list_subjects(
        &self,
        query: SubjectListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_subjects(self, query, request).await
    }

    // 创建科目
    pub async fn create_subject(
        &self,
        subject_data: CreateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_subject(self, subject_data, request).await
    }

    // 根据ID获取科目
    pub async fn get_subject(
        &self,
        subject_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_subject(self, subject_id, request).await
    }

    // 更新科目信息
    pub async fn update_subject(
        &self,
        subject_id: &str,
        update_data: UpdateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_subject(self, subject_id, update_data, request).await
    }

    // 硬删除科目（级联删除排课记录）
    pub async fn delete_subject(
        &self,
        subject_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_subject(self, subject_id, request).await
    }
}
