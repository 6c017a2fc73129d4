//! 排课（班级-科目关联）存储操作

use super::SeaOrmStorage;
use crate::entity::class_subjects::{ActiveModel, Column, Entity as ClassSubjects};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    class_subjects::{
        entities::ClassSubject,
        requests::{ClassSubjectListQuery, CreateClassSubjectRequest},
        responses::ClassSubjectListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建排课记录，唯一约束与外键由数据库保证
    pub async fn create_class_subject_impl(
        &self,
        req: CreateClassSubjectRequest,
    ) -> Result<ClassSubject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            class_id: Set(req.class_id),
            subject_id: Set(req.subject_id),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建排课记录失败: {e}")))?;

        Ok(result.into_class_subject())
    }

    /// 通过 ID 获取排课记录
    pub async fn get_class_subject_by_id_impl(&self, id: &str) -> Result<Option<ClassSubject>> {
        let result = ClassSubjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询排课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_class_subject()))
    }

    /// 分页列出排课记录
    pub async fn list_class_subjects_with_pagination_impl(
        &self,
        query: ClassSubjectListQuery,
    ) -> Result<ClassSubjectListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = ClassSubjects::find();

        if let Some(ref class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        if let Some(ref subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询排课总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询排课页数失败: {e}"))
        })?;

        let assignments = paginator.fetch_page(page - 1).await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询排课列表失败: {e}"))
        })?;

        Ok(ClassSubjectListResponse {
            items: assignments
                .into_iter()
                .map(|m| m.into_class_subject())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 硬删除排课记录
    pub async fn delete_class_subject_impl(&self, id: &str) -> Result<bool> {
        let result = ClassSubjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除排课记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
