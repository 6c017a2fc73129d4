use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;
use utoipa::ToSchema;

// 排课查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_subject.ts")]
pub struct ClassSubjectListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub class_id: Option<String>,
    pub subject_id: Option<String>,
}

// 排课创建请求
#[derive(Debug, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "../frontend/src/types/generated/class_subject.ts")]
pub struct CreateClassSubjectRequest {
    pub class_id: String,
    pub subject_id: String,
}

// 排课列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_subject.ts")]
pub struct ClassSubjectListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_id: Option<String>,
    pub subject_id: Option<String>,
}
