//! 数据存储层
//!
//! 统一的 `Storage` trait，两个可互换实现：
//! - `sea_orm_storage`: SQLite/PostgreSQL/MySQL 持久化（默认）
//! - `fixture_storage`: 内存固定数据，演示模式使用
//!
//! 启动时根据配置选择一次，业务层只依赖 trait。

use std::sync::Arc;

use crate::models::{
    audit::{entities::AuditLog, requests::AuditLogListQuery, responses::AuditLogListResponse},
    class_subjects::{
        entities::ClassSubject,
        requests::{ClassSubjectListQuery, CreateClassSubjectRequest},
        responses::ClassSubjectListResponse,
    },
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    student_classes::{
        entities::StudentClass,
        requests::{CreateStudentClassRequest, StudentClassListQuery},
        responses::StudentClassListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::config::AppConfig;
use crate::errors::{Result, SchoolSystemError};

pub mod fixture_storage;
pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段须为已哈希的值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, user_id: &str) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, user_id: &str, update: UpdateUserRequest) -> Result<Option<User>>;
    // 软删除用户（active = false）
    async fn delete_user(&self, user_id: &str) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, user_id: &str) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 学生管理方法
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, student_id: &str) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    async fn update_student(
        &self,
        student_id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 软删除学生（active = false，行保留）
    async fn delete_student(&self, student_id: &str) -> Result<bool>;

    /// 教师管理方法
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, teacher_id: &str) -> Result<Option<Teacher>>;
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse>;
    async fn update_teacher(
        &self,
        teacher_id: &str,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    // 软删除教师
    async fn delete_teacher(&self, teacher_id: &str) -> Result<bool>;

    /// 班级管理方法
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    async fn get_class_by_id(&self, class_id: &str) -> Result<Option<Class>>;
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    async fn update_class(
        &self,
        class_id: &str,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 硬删除，级联删除选课/排课记录
    async fn delete_class(&self, class_id: &str) -> Result<bool>;

    /// 科目管理方法
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, subject_id: &str) -> Result<Option<Subject>>;
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse>;
    async fn update_subject(
        &self,
        subject_id: &str,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    async fn delete_subject(&self, subject_id: &str) -> Result<bool>;

    /// 选课（学生-班级关联）管理方法
    async fn create_student_class(
        &self,
        enrollment: CreateStudentClassRequest,
    ) -> Result<StudentClass>;
    async fn get_student_class_by_id(&self, id: &str) -> Result<Option<StudentClass>>;
    async fn list_student_classes_with_pagination(
        &self,
        query: StudentClassListQuery,
    ) -> Result<StudentClassListResponse>;
    async fn delete_student_class(&self, id: &str) -> Result<bool>;

    /// 排课（班级-科目关联）管理方法
    async fn create_class_subject(
        &self,
        assignment: CreateClassSubjectRequest,
    ) -> Result<ClassSubject>;
    async fn get_class_subject_by_id(&self, id: &str) -> Result<Option<ClassSubject>>;
    async fn list_class_subjects_with_pagination(
        &self,
        query: ClassSubjectListQuery,
    ) -> Result<ClassSubjectListResponse>;
    async fn delete_class_subject(&self, id: &str) -> Result<bool>;

    /// 审计日志方法
    // 追加一条审计日志（调用方负责 fire-and-forget 语义）
    async fn append_audit_log(&self, entry: AuditLog) -> Result<()>;
    async fn list_audit_logs_with_pagination(
        &self,
        query: AuditLogListQuery,
    ) -> Result<AuditLogListResponse>;

    /// 健康检查探针
    async fn ping(&self) -> Result<()>;
    /// 后端名称（健康检查响应中展示）
    fn backend_name(&self) -> &'static str;
}

/// 按配置创建存储后端，进程生命周期内只调用一次
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let config = AppConfig::get();
    match config.storage.storage_type.as_str() {
        "sqlite" | "database" => {
            let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
            Ok(Arc::new(storage))
        }
        "fixture" => {
            let storage = fixture_storage::FixtureStorage::new();
            Ok(Arc::new(storage))
        }
        other => Err(SchoolSystemError::storage_plugin_not_found(format!(
            "未知的存储后端类型: {other}. 支持: sqlite / database / fixture"
        ))),
    }
}
