//! OpenAPI 文档定义
//!
//! Swagger UI 挂载在 /docs，JSON 描述位于 /api-docs/openapi.json。
//! 只覆盖稳定的公开端点，资源 CRUD 端点的请求/响应模型统一注册在 components。

use utoipa::OpenApi;

use crate::models::auth::requests::LoginRequest;
use crate::models::class_subjects::requests::CreateClassSubjectRequest;
use crate::models::classes::requests::{CreateClassRequest, UpdateClassRequest};
use crate::models::student_classes::requests::CreateStudentClassRequest;
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::models::subjects::requests::{CreateSubjectRequest, UpdateSubjectRequest};
use crate::models::teachers::requests::{CreateTeacherRequest, UpdateTeacherRequest};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::auth::login,
        crate::routes::auth::profile,
        crate::routes::system::health,
    ),
    components(schemas(
        LoginRequest,
        UserRole,
        CreateUserRequest,
        UpdateUserRequest,
        CreateStudentRequest,
        UpdateStudentRequest,
        CreateTeacherRequest,
        UpdateTeacherRequest,
        CreateClassRequest,
        UpdateClassRequest,
        CreateSubjectRequest,
        UpdateSubjectRequest,
        CreateStudentClassRequest,
        CreateClassSubjectRequest,
    )),
    tags(
        (name = "auth", description = "认证与当前用户"),
        (name = "system", description = "健康检查")
    ),
    info(
        title = "School Management System API",
        description = "学校管理系统后端 REST API"
    )
)]
pub struct ApiDoc;
