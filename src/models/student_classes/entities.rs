use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生-班级关联（选课记录）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student_class.ts")]
pub struct StudentClass {
    pub id: String,
    pub student_id: String,
    pub class_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
