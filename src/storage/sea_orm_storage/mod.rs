//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod audit_logs;
mod class_subjects;
mod classes;
mod student_classes;
mod students;
mod subjects;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("foreign_keys", "ON")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.is_empty() {
            // 未配置时使用当前目录下的单文件库
            return Ok("sqlite://schoolsystem.db?mode=rwc".to_string());
        }
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, user_id: &str) -> Result<Option<User>> {
        self.get_user_by_id_impl(user_id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, user_id: &str, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(user_id, update).await
    }

    async fn delete_user(&self, user_id: &str) -> Result<bool> {
        self.delete_user_impl(user_id).await
    }

    async fn update_last_login(&self, user_id: &str) -> Result<bool> {
        self.update_last_login_impl(user_id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, student_id: &str) -> Result<Option<Student>> {
        self.get_student_by_id_impl(student_id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        student_id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(student_id, update).await
    }

    async fn delete_student(&self, student_id: &str) -> Result<bool> {
        self.delete_student_impl(student_id).await
    }

    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, teacher_id: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(teacher_id).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn update_teacher(
        &self,
        teacher_id: &str,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(teacher_id, update).await
    }

    async fn delete_teacher(&self, teacher_id: &str) -> Result<bool> {
        self.delete_teacher_impl(teacher_id).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, class_id: &str) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        self.list_classes_with_pagination_impl(query).await
    }

    async fn update_class(
        &self,
        class_id: &str,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: &str) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    // 科目模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, subject_id: &str) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(subject_id).await
    }

    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        self.list_subjects_with_pagination_impl(query).await
    }

    async fn update_subject(
        &self,
        subject_id: &str,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(subject_id, update).await
    }

    async fn delete_subject(&self, subject_id: &str) -> Result<bool> {
        self.delete_subject_impl(subject_id).await
    }

    // 选课模块
    async fn create_student_class(
        &self,
        enrollment: CreateStudentClassRequest,
    ) -> Result<StudentClass> {
        self.create_student_class_impl(enrollment).await
    }

    async fn get_student_class_by_id(&self, id: &str) -> Result<Option<StudentClass>> {
        self.get_student_class_by_id_impl(id).await
    }

    async fn list_student_classes_with_pagination(
        &self,
        query: StudentClassListQuery,
    ) -> Result<StudentClassListResponse> {
        self.list_student_classes_with_pagination_impl(query).await
    }

    async fn delete_student_class(&self, id: &str) -> Result<bool> {
        self.delete_student_class_impl(id).await
    }

    // 排课模块
    async fn create_class_subject(
        &self,
        assignment: CreateClassSubjectRequest,
    ) -> Result<ClassSubject> {
        self.create_class_subject_impl(assignment).await
    }

    async fn get_class_subject_by_id(&self, id: &str) -> Result<Option<ClassSubject>> {
        self.get_class_subject_by_id_impl(id).await
    }

    async fn list_class_subjects_with_pagination(
        &self,
        query: ClassSubjectListQuery,
    ) -> Result<ClassSubjectListResponse> {
        self.list_class_subjects_with_pagination_impl(query).await
    }

    async fn delete_class_subject(&self, id: &str) -> Result<bool> {
        self.delete_class_subject_impl(id).await
    }

    // 审计日志模块
    async fn append_audit_log(&self, entry: AuditLog) -> Result<()> {
        self.append_audit_log_impl(entry).await
    }

    async fn list_audit_logs_with_pagination(
        &self,
        query: AuditLogListQuery,
    ) -> Result<AuditLogListResponse> {
        self.list_audit_logs_with_pagination_impl(query).await
    }

    // 健康检查
    async fn ping(&self) -> Result<()> {
        self.db
            .ping()
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("数据库探活失败: {e}")))
    }

    fn backend_name(&self) -> &'static str {
        "sea_orm"
    }
}
