use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::student_classes::requests::{
    CreateStudentClassRequest, StudentClassListParams,
};
use crate::models::users::entities::UserRole;
use crate::services::StudentClassService;

// 懒加载的全局 StudentClassService 实例
static STUDENT_CLASS_SERVICE: Lazy<StudentClassService> =
    Lazy::new(StudentClassService::new_lazy);

// HTTP处理程序
pub async fn list_enrollments(
    req: HttpRequest,
    query: web::Query<StudentClassListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_CLASS_SERVICE
        .list_enrollments(query.into_inner(), &req)
        .await
}

pub async fn create_enrollment(
    req: HttpRequest,
    enrollment_data: web::Json<CreateStudentClassRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_CLASS_SERVICE
        .create_enrollment(enrollment_data.into_inner(), &req)
        .await
}

pub async fn get_enrollment(req: HttpRequest, id: web::Path<String>) -> ActixResult<HttpResponse> {
    STUDENT_CLASS_SERVICE.get_enrollment(&id, &req).await
}

pub async fn delete_enrollment(
    req: HttpRequest,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    STUDENT_CLASS_SERVICE.delete_enrollment(&id, &req).await
}

// 配置路由：读取开放给教职员，写操作仅限管理员
pub fn configure_student_class_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/student-classes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .guard(guard::Get())
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::get().to(list_enrollments))
                    .route("/{id}", web::get().to(get_enrollment)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::post().to(create_enrollment))
                    .route("/{id}", web::delete().to(delete_enrollment)),
            ),
    );
}
