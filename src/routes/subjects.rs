use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::subjects::requests::{
    CreateSubjectRequest, SubjectListParams, UpdateSubjectRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::SubjectService;

// 懒加载的全局 SubjectService 实例
static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

// HTTP处理程序
pub async fn list_subjects(
    req: HttpRequest,
    query: web::Query<SubjectListParams>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_subjects(query.into_inner(), &req).await
}

pub async fn create_subject(
    req: HttpRequest,
    subject_data: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .create_subject(subject_data.into_inner(), &req)
        .await
}

pub async fn get_subject(
    req: HttpRequest,
    subject_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.get_subject(&subject_id, &req).await
}

pub async fn update_subject(
    req: HttpRequest,
    subject_id: web::Path<String>,
    update_data: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .update_subject(&subject_id, update_data.into_inner(), &req)
        .await
}

pub async fn delete_subject(
    req: HttpRequest,
    subject_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.delete_subject(&subject_id, &req).await
}

// 配置路由：读取开放给所有登录角色，写操作仅限管理员
pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/subjects")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .guard(guard::Get())
                    .wrap(middlewares::RequireRole::new_any(UserRole::all_roles()))
                    .route("", web::get().to(list_subjects))
                    .route("/{id}", web::get().to(get_subject)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::post().to(create_subject))
                    .route("/{id}", web::put().to(update_subject))
                    .route("/{id}", web::delete().to(delete_subject)),
            ),
    );
}
