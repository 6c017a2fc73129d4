use crate::models::common::PaginationQuery;
use crate::models::common::pagination::deserialize_optional_bool;
use serde::Deserialize;
use ts_rs::TS;
use utoipa::ToSchema;

// 教师查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub include_inactive: Option<bool>,
}

// 教师创建请求
#[derive(Debug, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateTeacherRequest {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject_specialty: Option<String>,
}

// 教师更新请求
#[derive(Debug, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject_specialty: Option<String>,
}

// 教师列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub include_inactive: Option<bool>,
}
