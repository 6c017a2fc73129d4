use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::classes::requests::{ClassListParams, CreateClassRequest, UpdateClassRequest};
use crate::models::users::entities::UserRole;
use crate::services::ClassService;

// 懒加载的全局 ClassService 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// HTTP处理程序
pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<ClassListParams>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(query.into_inner(), &req).await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.create_class(class_data.into_inner(), &req).await
}

pub async fn get_class(req: HttpRequest, class_id: web::Path<String>) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&class_id, &req).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: web::Path<String>,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&class_id, update_data.into_inner(), &req)
        .await
}

pub async fn delete_class(
    req: HttpRequest,
    class_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&class_id, &req).await
}

// 配置路由：读取开放给所有登录角色，写操作仅限管理员
pub fn configure_class_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .guard(guard::Get())
                    .wrap(middlewares::RequireRole::new_any(UserRole::all_roles()))
                    .route("", web::get().to(list_classes))
                    .route("/{id}", web::get().to(get_class)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::post().to(create_class))
                    .route("/{id}", web::put().to(update_class))
                    .route("/{id}", web::delete().to(delete_class)),
            ),
    );
}
