use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 审计日志条目（追加写，不可修改）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/audit.ts")]
pub struct AuditLog {
    pub id: String,
    // 操作人用户名
    pub actor: String,
    // 动作标识，如 student.create
    pub action: String,
    // 目标资源ID
    pub target: Option<String>,
    // 附加说明
    pub detail: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl AuditLog {
    pub fn new(
        actor: impl Into<String>,
        action: impl Into<String>,
        target: Option<String>,
        detail: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            actor: actor.into(),
            action: action.into(),
            target,
            detail,
            created_at: chrono::Utc::now(),
        }
    }
}
