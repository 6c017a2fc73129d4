//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(uuid::Uuid::new_v4().to_string()),
            full_name: Set(req.full_name),
            email: Set(req.email),
            phone: Set(req.phone),
            date_of_birth: Set(req.date_of_birth),
            guardian_name: Set(req.guardian_name),
            active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生，软删除的行仍然可见
    pub async fn get_student_by_id_impl(&self, student_id: &str) -> Result<Option<Student>> {
        let result = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生，默认过滤掉软删除的行
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Students::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FullName.contains(&escaped))
                    .add(Column::Email.contains(&escaped))
                    .add(Column::GuardianName.contains(&escaped)),
            );
        }

        // 默认只返回在籍学生
        if !query.include_inactive.unwrap_or(false) {
            select = select.filter(Column::Active.eq(true));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        student_id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = self.get_student_by_id_impl(student_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            student_id: Set(student_id.to_string()),
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

        if let Some(date_of_birth) = update.date_of_birth {
            model.date_of_birth = Set(Some(date_of_birth));
        }

        if let Some(guardian_name) = update.guardian_name {
            model.guardian_name = Set(Some(guardian_name));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_by_id_impl(student_id).await
    }

    /// 软删除学生（active = false，行保留）
    pub async fn delete_student_impl(&self, student_id: &str) -> Result<bool> {
        let result = Students::update_many()
            .col_expr(Column::Active, sea_orm::sea_query::Expr::value(false))
            .col_expr(
                Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::StudentId.eq(student_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
