//! 选课（学生-班级关联）存储操作

use super::SeaOrmStorage;
use crate::entity::student_classes::{ActiveModel, Column, Entity as StudentClasses};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    student_classes::{
        entities::StudentClass,
        requests::{CreateStudentClassRequest, StudentClassListQuery},
        responses::StudentClassListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建选课记录
    ///
    /// (student_id, class_id) 唯一约束与两侧外键由数据库保证，
    /// 违反时错误消息带回 "UNIQUE constraint failed" / "FOREIGN KEY constraint failed"。
    pub async fn create_student_class_impl(
        &self,
        req: CreateStudentClassRequest,
    ) -> Result<StudentClass> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            student_id: Set(req.student_id),
            class_id: Set(req.class_id),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建选课记录失败: {e}")))?;

        Ok(result.into_student_class())
    }

    /// 通过 ID 获取选课记录
    pub async fn get_student_class_by_id_impl(&self, id: &str) -> Result<Option<StudentClass>> {
        let result = StudentClasses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_student_class()))
    }

    /// 分页列出选课记录
    pub async fn list_student_classes_with_pagination_impl(
        &self,
        query: StudentClassListQuery,
    ) -> Result<StudentClassListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = StudentClasses::find();

        if let Some(ref student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(ref class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询选课总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询选课页数失败: {e}"))
        })?;

        let enrollments = paginator.fetch_page(page - 1).await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询选课列表失败: {e}"))
        })?;

        Ok(StudentClassListResponse {
            items: enrollments
                .into_iter()
                .map(|m| m.into_student_class())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 硬删除选课记录
    pub async fn delete_student_class_impl(&self, id: &str) -> Result<bool> {
        let result = StudentClasses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除选课记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
