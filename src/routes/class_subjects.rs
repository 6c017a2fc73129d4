use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::class_subjects::requests::{ClassSubjectListParams, CreateClassSubjectRequest};
use crate::models::users::entities::UserRole;
use crate::services::ClassSubjectService;

// 懒加载的全局 ClassSubjectService 实例
static CLASS_SUBJECT_SERVICE: Lazy<ClassSubjectService> =
    Lazy::new(ClassSubjectService::new_lazy);

// HTTP处理程序
pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<ClassSubjectListParams>,
) -> ActixResult<HttpResponse> {
    CLASS_SUBJECT_SERVICE
        .list_assignments(query.into_inner(), &req)
        .await
}

pub async fn create_assignment(
    req: HttpRequest,
    assignment_data: web::Json<CreateClassSubjectRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SUBJECT_SERVICE
        .create_assignment(assignment_data.into_inner(), &req)
        .await
}

pub async fn get_assignment(req: HttpRequest, id: web::Path<String>) -> ActixResult<HttpResponse> {
    CLASS_SUBJECT_SERVICE.get_assignment(&id, &req).await
}

pub async fn delete_assignment(
    req: HttpRequest,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    CLASS_SUBJECT_SERVICE.delete_assignment(&id, &req).await
}

// 配置路由：读取开放给教职员，写操作仅限管理员
pub fn configure_class_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/class-subjects")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .guard(guard::Get())
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::get().to(list_assignments))
                    .route("/{id}", web::get().to(get_assignment)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::post().to(create_assignment))
                    .route("/{id}", web::delete().to(delete_assignment)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test, web};

    use super::*;
    use crate::storage::Storage;
    use crate::test_utils;

    macro_rules! init_app {
        ($storage:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($storage.clone()))
                    .app_data(web::Data::new(test_utils::memory_cache()))
                    .configure(configure_class_subject_routes),
            )
            .await
        };
    }

    fn bearer(token: &str) -> (&'static str, String) {
        ("Authorization", format!("Bearer {token}"))
    }

    #[actix_web::test]
    async fn duplicate_assignment_returns_conflict() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "cs_admin1", UserRole::Admin).await;
        let app = init_app!(storage);

        // fx-class-0001 已排 fx-subject-0001
        let req = test::TestRequest::post()
            .uri("/api/v1/class-subjects")
            .insert_header(bearer(&token))
            .set_json(serde_json::json!({
                "class_id": "fx-class-0001",
                "subject_id": "fx-subject-0001"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Subject is already assigned to this class");
    }

    #[actix_web::test]
    async fn assignment_with_unknown_subject_is_rejected() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "cs_admin2", UserRole::Admin).await;
        let app = init_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/v1/class-subjects")
            .insert_header(bearer(&token))
            .set_json(serde_json::json!({
                "class_id": "fx-class-0001",
                "subject_id": "no-such-subject"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Class or subject does not exist");
    }

    #[actix_web::test]
    async fn list_filters_by_class_id() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "cs_staff1", UserRole::Teacher).await;
        let app = init_app!(storage);

        let req = test::TestRequest::get()
            .uri("/api/v1/class-subjects?class_id=fx-class-0001")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|a| a["class_id"] == "fx-class-0001"));
    }

    #[actix_web::test]
    async fn assignment_create_is_admin_only() {
        let storage: Arc<dyn Storage> = test_utils::fixture_storage();
        let token = test_utils::seed_user_token(&storage, "cs_staff2", UserRole::Teacher).await;
        let app = init_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/v1/class-subjects")
            .insert_header(bearer(&token))
            .set_json(serde_json::json!({
                "class_id": "fx-class-0002",
                "subject_id": "fx-subject-0001"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
