//! 科目存储操作

use super::SeaOrmStorage;
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建科目
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            subject_id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(req.name),
            code: Set(req.code),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, subject_id: &str) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(subject_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 分页列出科目
    pub async fn list_subjects_with_pagination_impl(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Subjects::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Code.contains(&escaped)),
            );
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目页数失败: {e}")))?;

        let subjects = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(SubjectListResponse {
            items: subjects.into_iter().map(|m| m.into_subject()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新科目信息
    pub async fn update_subject_impl(
        &self,
        subject_id: &str,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let existing = self.get_subject_by_id_impl(subject_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            subject_id: Set(subject_id.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(code) = update.code {
            model.code = Set(Some(code));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新科目失败: {e}")))?;

        self.get_subject_by_id_impl(subject_id).await
    }

    /// 硬删除科目，外键级联删除排课记录
    pub async fn delete_subject_impl(&self, subject_id: &str) -> Result<bool> {
        let result = Subjects::delete_by_id(subject_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
