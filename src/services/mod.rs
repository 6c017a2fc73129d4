//! 业务服务层
//!
//! 每个资源一个 Service 结构体，具体处理逻辑拆分到子模块文件。
//! Service 从请求的 app_data 中取出存储后端，业务只依赖 Storage trait。

pub mod audit;
pub mod auth;
pub mod class_subjects;
pub mod classes;
pub mod student_classes;
pub mod students;
pub mod subjects;
pub mod system;
pub mod teachers;
pub mod users;

pub use audit::AuditService;
pub use auth::AuthService;
pub use class_subjects::ClassSubjectService;
pub use classes::ClassService;
pub use student_classes::StudentClassService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use system::SystemService;
pub use teachers::TeacherService;
pub use users::UserService;

use std::sync::Arc;

use crate::models::audit::entities::AuditLog;
use crate::storage::Storage;

// SQLite 约束错误通过消息文本识别，fixture 后端保持同样的措辞
pub(crate) fn is_unique_violation(msg: &str) -> bool {
    msg.contains("UNIQUE constraint failed")
}

pub(crate) fn is_foreign_key_violation(msg: &str) -> bool {
    msg.contains("FOREIGN KEY constraint failed")
}

/// 追加审计日志，fire-and-forget：写入失败只记录告警，不影响业务响应
pub(crate) fn record_audit(
    storage: Arc<dyn Storage>,
    actor: impl Into<String>,
    action: impl Into<String>,
    target: Option<String>,
    detail: Option<String>,
) {
    let entry = AuditLog::new(actor, action, target, detail);
    tokio::spawn(async move {
        if let Err(e) = storage.append_audit_log(entry).await {
            tracing::warn!("Failed to append audit log: {e}");
        }
    });
}
