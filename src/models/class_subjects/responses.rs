use super::entities::ClassSubject;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 排课响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_subject.ts")]
pub struct ClassSubjectResponse {
    pub assignment: ClassSubject,
}

// 排课列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_subject.ts")]
pub struct ClassSubjectListResponse {
    pub items: Vec<ClassSubject>,
    pub pagination: PaginationInfo,
}
