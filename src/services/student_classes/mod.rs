pub mod create;
pub mod delete;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::student_classes::requests::{
    CreateStudentClassRequest, StudentClassListParams,
};
use crate::storage::Storage;

pub struct StudentClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentClassService {
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

    // 获取选课记录列表
    pub async fn list_enrollments(
        &self,
        query: StudentClassListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_enrollments(self, query, request).await
    }

    // 创建选课记录
    pub async fn create_enrollment(
        &self,
        enrollment_data: CreateStudentClassRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_enrollment(self, enrollment_data, request).await
    }

    // 根据ID获取选课记录
    pub async fn get_enrollment(
        &self,
        id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_enrollment(self, id, request).await
    }

    // 删除选课记录
    pub async fn delete_enrollment(
        &self,
        id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_enrollment(self, id, request).await
    }
}
