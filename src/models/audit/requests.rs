use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 审计日志查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/audit.ts")]
pub struct AuditLogListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub actor: Option<String>,
    pub action: Option<String>,
}

// 审计日志查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/audit.ts")]
pub struct AuditLogListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub actor: Option<String>,
    pub action: Option<String>,
}
