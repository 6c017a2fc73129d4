use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级-科目关联（排课记录）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_subject.ts")]
pub struct ClassSubject {
    pub id: String,
    pub class_id: String,
    pub subject_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
