use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::teachers::requests::{
    CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::TeacherService;

// 懒加载的全局 TeacherService 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

// HTTP处理程序
pub async fn list_teachers(
    req: HttpRequest,
    query: web::Query<TeacherListParams>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_teachers(query.into_inner(), &req).await
}

pub async fn create_teacher(
    req: HttpRequest,
    teacher_data: web::Json<CreateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .create_teacher(teacher_data.into_inner(), &req)
        .await
}

pub async fn get_teacher(
    req: HttpRequest,
    teacher_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_teacher(&teacher_id, &req).await
}

pub async fn update_teacher(
    req: HttpRequest,
    teacher_id: web::Path<String>,
    update_data: web::Json<UpdateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .update_teacher(&teacher_id, update_data.into_inner(), &req)
        .await
}

pub async fn delete_teacher(
    req: HttpRequest,
    teacher_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.delete_teacher(&teacher_id, &req).await
}

// 配置路由：读取开放给教职员，写操作仅限管理员
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .guard(guard::Get())
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::get().to(list_teachers))
                    .route("/{id}", web::get().to(get_teacher)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::post().to(create_teacher))
                    .route("/{id}", web::put().to(update_teacher))
                    .route("/{id}", web::delete().to(delete_teacher)),
            ),
    );
}
