//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            teacher_id: Set(uuid::Uuid::new_v4().to_string()),
            full_name: Set(req.full_name),
            email: Set(req.email),
            phone: Set(req.phone),
            subject_specialty: Set(req.subject_specialty),
            active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_teacher())
    }

    /// 通过 ID 获取教师，软删除的行仍然可见
    pub async fn get_teacher_by_id_impl(&self, teacher_id: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(teacher_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 分页列出教师，默认过滤掉软删除的行
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Teachers::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FullName.contains(&escaped))
                    .add(Column::Email.contains(&escaped))
                    .add(Column::SubjectSpecialty.contains(&escaped)),
            );
        }

        // 默认只返回在职教师
        if !query.include_inactive.unwrap_or(false) {
            select = select.filter(Column::Active.eq(true));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师页数失败: {e}")))?;

        let teachers = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(TeacherListResponse {
            items: teachers.into_iter().map(|m| m.into_teacher()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新教师信息
    pub async fn update_teacher_impl(
        &self,
        teacher_id: &str,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        let existing = self.get_teacher_by_id_impl(teacher_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            teacher_id: Set(teacher_id.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(full_name) = update.full_name {
            model.full_name = Set(full_name);
        }

        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }

        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        if let Some(subject_specialty) = update.subject_specialty {
            model.subject_specialty = Set(Some(subject_specialty));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新教师失败: {e}")))?;

        self.get_teacher_by_id_impl(teacher_id).await
    }

    /// 软删除教师（active = false，行保留）
    pub async fn delete_teacher_impl(&self, teacher_id: &str) -> Result<bool> {
        let result = Teachers::update_many()
            .col_expr(Column::Active, sea_orm::sea_query::Expr::value(false))
            .col_expr(
                Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::TeacherId.eq(teacher_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除教师失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
