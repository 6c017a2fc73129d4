use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    // 学生ID
    pub student_id: String,
    // 姓名
    pub full_name: String,
    // 邮箱
    pub email: Option<String>,
    // 电话
    pub phone: Option<String>,
    // 出生日期 (YYYY-MM-DD)
    pub date_of_birth: Option<String>,
    // 监护人姓名
    pub guardian_name: Option<String>,
    // 是否在籍（软删除标志）
    pub active: bool,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
