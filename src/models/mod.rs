//! 数据模型定义
//!
//! 按资源划分子模块，每个资源包含 entities / requests / responses。

pub mod audit;
pub mod auth;
pub mod class_subjects;
pub mod classes;
pub mod common;
pub mod student_classes;
pub mod students;
pub mod subjects;
pub mod system;
pub mod teachers;
pub mod users;

pub use common::response::{ApiResponse, ResponseStatus};
pub use common::PaginationInfo;

/// 应用启动时间，用于健康检查的 uptime 计算
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
