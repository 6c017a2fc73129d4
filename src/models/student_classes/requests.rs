use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;
use utoipa::ToSchema;

// 选课查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student_class.ts")]
pub struct StudentClassListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub student_id: Option<String>,
    pub class_id: Option<String>,
}

// 选课创建请求
#[derive(Debug, Deserialize, TS, ToSchema)]
#[ts(export, export_to = "../frontend/src/types/generated/student_class.ts")]
pub struct CreateStudentClassRequest {
    pub student_id: String,
    pub class_id: String,
}

// 选课列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student_class.ts")]
pub struct StudentClassListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<String>,
    pub class_id: Option<String>,
}
