//! 审计日志存储操作（只追加，不提供修改与删除）

use super::SeaOrmStorage;
use crate::entity::audit_logs::{ActiveModel, Column, Entity as AuditLogs};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    audit::{
        entities::AuditLog, requests::AuditLogListQuery, responses::AuditLogListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 追加一条审计日志，写入失败只向上传递错误，由调用方决定是否忽略
    pub async fn append_audit_log_impl(&self, entry: AuditLog) -> Result<()> {
        let model = ActiveModel {
            id: Set(entry.id),
            actor: Set(entry.actor),
            action: Set(entry.action),
            target: Set(entry.target),
            detail: Set(entry.detail),
            created_at: Set(entry.created_at.timestamp()),
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("写入审计日志失败: {e}")))?;

        Ok(())
    }

    /// 分页列出审计日志，按时间倒序
    pub async fn list_audit_logs_with_pagination_impl(
        &self,
        query: AuditLogListQuery,
    ) -> Result<AuditLogListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = AuditLogs::find();

        if let Some(ref actor) = query.actor {
            select = select.filter(Column::Actor.eq(actor));
        }

        if let Some(ref action) = query.action {
            select = select.filter(Column::Action.eq(action));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询审计日志总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询审计日志页数失败: {e}"))
        })?;

        let entries = paginator.fetch_page(page - 1).await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询审计日志列表失败: {e}"))
        })?;

        Ok(AuditLogListResponse {
            items: entries.into_iter().map(|m| m.into_audit_log()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
