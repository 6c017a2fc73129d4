use super::entities::StudentClass;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 选课响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student_class.ts")]
pub struct StudentClassResponse {
    pub enrollment: StudentClass,
}

// 选课列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student_class.ts")]
pub struct StudentClassListResponse {
    pub items: Vec<StudentClass>,
    pub pagination: PaginationInfo,
}
