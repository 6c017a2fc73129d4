use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct Teacher {
    // 教师ID
    pub teacher_id: String,
    // 姓名
    pub full_name: String,
    // 邮箱
    pub email: Option<String>,
    // 电话
    pub phone: Option<String>,
    // 任教科目
    pub subject_specialty: Option<String>,
    // 是否在职（软删除标志）
    pub active: bool,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
